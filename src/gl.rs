//! Typed GL enums passed between the cache and its driver.
//!
//! Each enum maps one-to-one onto the raw GLES enum values so a driver
//! backend can forward them without a lookup table. Open-ended sets
//! (capabilities, texture parameters) carry an `Other` escape for
//! extension enums the crate does not name.

use bitflags::bitflags;

/// GL name of texture unit 0. Unit `n` is `TEXTURE0 + n`.
pub const TEXTURE0: u32 = 0x84C0;

/// GL name of texture unit `unit`. Saturates instead of overflowing, so an
/// absurd unit index reaches the driver as an invalid enum.
#[must_use]
pub const fn texture_unit(unit: u32) -> u32 {
    TEXTURE0.saturating_add(unit)
}

/// Closed enum over a fixed set of GL values.
macro_rules! gl_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Raw GL enum value.
            #[must_use]
            pub const fn to_gl(self) -> u32 {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Typed value for a raw GL enum, `None` if it is not part of
            /// this set.
            #[must_use]
            pub const fn from_gl(value: u32) -> Option<Self> {
                match value {
                    $(v if v == $value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

/// Open enum: named GL values plus an `Other` escape for extensions.
macro_rules! open_gl_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Any other raw GL enum value.
            Other(u32),
        }

        impl $name {
            /// Raw GL enum value.
            #[must_use]
            pub const fn to_gl(self) -> u32 {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Other(raw) => raw,
                }
            }

            /// Typed value for a raw GL enum. Unknown values become
            /// `Other`, so `from_gl(x).to_gl() == x` always holds.
            #[must_use]
            pub const fn from_gl(value: u32) -> Self {
                match value {
                    $(v if v == $value => Self::$variant,)+
                    raw => Self::Other(raw),
                }
            }

            /// Canonical spelling: `Other(x)` for a named value becomes
            /// the named variant, so both spellings compare and hash equal.
            #[must_use]
            pub const fn normalized(self) -> Self {
                Self::from_gl(self.to_gl())
            }
        }
    };
}

gl_enum! {
    /// Binding point for buffer-like objects.
    ///
    /// Framebuffer and renderbuffer targets share the buffer binding cache
    /// but are forwarded to their own driver entry points, see
    /// [`BufferTarget::kind`].
    pub enum BufferTarget {
        /// `GL_ARRAY_BUFFER`
        Array = 0x8892,
        /// `GL_ELEMENT_ARRAY_BUFFER`
        ElementArray = 0x8893,
        /// `GL_UNIFORM_BUFFER`
        Uniform = 0x8A11,
        /// `GL_PIXEL_PACK_BUFFER`
        PixelPack = 0x88EB,
        /// `GL_PIXEL_UNPACK_BUFFER`
        PixelUnpack = 0x88EC,
        /// `GL_COPY_READ_BUFFER`
        CopyRead = 0x8F36,
        /// `GL_COPY_WRITE_BUFFER`
        CopyWrite = 0x8F37,
        /// `GL_TRANSFORM_FEEDBACK_BUFFER`
        TransformFeedback = 0x8C8E,
        /// `GL_FRAMEBUFFER`
        Framebuffer = 0x8D40,
        /// `GL_READ_FRAMEBUFFER`
        ReadFramebuffer = 0x8CA8,
        /// `GL_DRAW_FRAMEBUFFER`
        DrawFramebuffer = 0x8CA9,
        /// `GL_RENDERBUFFER`
        Renderbuffer = 0x8D41,
    }
}

/// Which family of driver entry points a [`BufferTarget`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// `glBindBuffer` / `glDeleteBuffers`.
    Buffer,
    /// `glBindFramebuffer` / `glDeleteFramebuffers`.
    Framebuffer,
    /// `glBindRenderbuffer` / `glDeleteRenderbuffers`.
    Renderbuffer,
}

impl BufferTarget {
    /// Object family bound at this target.
    #[must_use]
    pub const fn kind(self) -> BufferKind {
        match self {
            Self::Framebuffer | Self::ReadFramebuffer | Self::DrawFramebuffer => {
                BufferKind::Framebuffer
            }
            Self::Renderbuffer => BufferKind::Renderbuffer,
            _ => BufferKind::Buffer,
        }
    }
}

gl_enum! {
    /// Texture binding target.
    pub enum TextureTarget {
        /// `GL_TEXTURE_2D`
        Texture2D = 0x0DE1,
        /// `GL_TEXTURE_CUBE_MAP`
        CubeMap = 0x8513,
        /// `GL_TEXTURE_3D`
        Texture3D = 0x806F,
        /// `GL_TEXTURE_2D_ARRAY`
        Texture2DArray = 0x8C1A,
        /// `GL_TEXTURE_EXTERNAL_OES`
        External = 0x8D65,
    }
}

open_gl_enum! {
    /// Integer texture (sampler) parameter name.
    pub enum TextureParam {
        /// `GL_TEXTURE_MAG_FILTER`
        MagFilter = 0x2800,
        /// `GL_TEXTURE_MIN_FILTER`
        MinFilter = 0x2801,
        /// `GL_TEXTURE_WRAP_S`
        WrapS = 0x2802,
        /// `GL_TEXTURE_WRAP_T`
        WrapT = 0x2803,
        /// `GL_TEXTURE_WRAP_R`
        WrapR = 0x8072,
        /// `GL_TEXTURE_BASE_LEVEL`
        BaseLevel = 0x813C,
        /// `GL_TEXTURE_MAX_LEVEL`
        MaxLevel = 0x813D,
        /// `GL_TEXTURE_COMPARE_MODE`
        CompareMode = 0x884C,
        /// `GL_TEXTURE_COMPARE_FUNC`
        CompareFunc = 0x884D,
        /// `GL_TEXTURE_MAX_ANISOTROPY_EXT`
        MaxAnisotropy = 0x84FE,
    }
}

gl_enum! {
    /// Blend source / destination factor.
    pub enum BlendFactor {
        /// `GL_ZERO`
        Zero = 0,
        /// `GL_ONE`
        One = 1,
        /// `GL_SRC_COLOR`
        SrcColour = 0x0300,
        /// `GL_ONE_MINUS_SRC_COLOR`
        OneMinusSrcColour = 0x0301,
        /// `GL_SRC_ALPHA`
        SrcAlpha = 0x0302,
        /// `GL_ONE_MINUS_SRC_ALPHA`
        OneMinusSrcAlpha = 0x0303,
        /// `GL_DST_ALPHA`
        DstAlpha = 0x0304,
        /// `GL_ONE_MINUS_DST_ALPHA`
        OneMinusDstAlpha = 0x0305,
        /// `GL_DST_COLOR`
        DstColour = 0x0306,
        /// `GL_ONE_MINUS_DST_COLOR`
        OneMinusDstColour = 0x0307,
        /// `GL_SRC_ALPHA_SATURATE`
        SrcAlphaSaturate = 0x0308,
        /// `GL_CONSTANT_COLOR`
        ConstantColour = 0x8001,
        /// `GL_ONE_MINUS_CONSTANT_COLOR`
        OneMinusConstantColour = 0x8002,
        /// `GL_CONSTANT_ALPHA`
        ConstantAlpha = 0x8003,
        /// `GL_ONE_MINUS_CONSTANT_ALPHA`
        OneMinusConstantAlpha = 0x8004,
    }
}

gl_enum! {
    /// Blend equation.
    pub enum BlendEquation {
        /// `GL_FUNC_ADD`
        Add = 0x8006,
        /// `GL_FUNC_SUBTRACT`
        Subtract = 0x800A,
        /// `GL_FUNC_REVERSE_SUBTRACT`
        ReverseSubtract = 0x800B,
        /// `GL_MIN`
        Min = 0x8007,
        /// `GL_MAX`
        Max = 0x8008,
    }
}

gl_enum! {
    /// Depth / stencil comparison function.
    pub enum CompareFunc {
        /// `GL_NEVER`
        Never = 0x0200,
        /// `GL_LESS`
        Less = 0x0201,
        /// `GL_EQUAL`
        Equal = 0x0202,
        /// `GL_LEQUAL`
        LessEqual = 0x0203,
        /// `GL_GREATER`
        Greater = 0x0204,
        /// `GL_NOTEQUAL`
        NotEqual = 0x0205,
        /// `GL_GEQUAL`
        GreaterEqual = 0x0206,
        /// `GL_ALWAYS`
        Always = 0x0207,
    }
}

gl_enum! {
    /// Faces discarded when face culling is enabled.
    pub enum CullFace {
        /// `GL_FRONT`
        Front = 0x0404,
        /// `GL_BACK`
        Back = 0x0405,
        /// `GL_FRONT_AND_BACK`
        FrontAndBack = 0x0408,
    }
}

gl_enum! {
    /// Rasterization mode for polygons.
    pub enum PolygonMode {
        /// `GL_POINT`
        Point = 0x1B00,
        /// `GL_LINE`
        Line = 0x1B01,
        /// `GL_FILL`
        Fill = 0x1B02,
    }
}

open_gl_enum! {
    /// Server-side capability toggled with `glEnable` / `glDisable`.
    pub enum Capability {
        /// `GL_BLEND`
        Blend = 0x0BE2,
        /// `GL_CULL_FACE`
        CullFace = 0x0B44,
        /// `GL_DEPTH_TEST`
        DepthTest = 0x0B71,
        /// `GL_DITHER`
        Dither = 0x0BD0,
        /// `GL_POLYGON_OFFSET_FILL`
        PolygonOffsetFill = 0x8037,
        /// `GL_SAMPLE_ALPHA_TO_COVERAGE`
        SampleAlphaToCoverage = 0x809E,
        /// `GL_SAMPLE_COVERAGE`
        SampleCoverage = 0x80A0,
        /// `GL_SCISSOR_TEST`
        ScissorTest = 0x0C11,
        /// `GL_STENCIL_TEST`
        StencilTest = 0x0B90,
        /// `GL_RASTERIZER_DISCARD`
        RasterizerDiscard = 0x8C89,
        /// `GL_PRIMITIVE_RESTART_FIXED_INDEX`
        PrimitiveRestartFixedIndex = 0x8D69,
    }
}

bitflags! {
    /// Framebuffer attachments the renderer wants discarded at the end of
    /// a frame (`EXT_discard_framebuffer`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DiscardBuffers: u32 {
        /// Colour attachment.
        const COLOUR = 1;
        /// Depth attachment.
        const DEPTH = 1 << 1;
        /// Stencil attachment.
        const STENCIL = 1 << 2;
    }
}

impl DiscardBuffers {
    /// Attachment enums for `glDiscardFramebufferEXT` on the default
    /// framebuffer (`GL_COLOR_EXT`, `GL_DEPTH_EXT`, `GL_STENCIL_EXT`).
    #[must_use]
    pub fn attachments(self) -> Vec<u32> {
        let mut out = Vec::with_capacity(3);
        if self.contains(Self::COLOUR) {
            out.push(0x1800);
        }
        if self.contains(Self::DEPTH) {
            out.push(0x1801);
        }
        if self.contains(Self::STENCIL) {
            out.push(0x1802);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framebuffer_targets_dispatch_separately() {
        assert_eq!(BufferTarget::Array.kind(), BufferKind::Buffer);
        assert_eq!(BufferTarget::Uniform.kind(), BufferKind::Buffer);
        assert_eq!(BufferTarget::Framebuffer.kind(), BufferKind::Framebuffer);
        assert_eq!(
            BufferTarget::DrawFramebuffer.kind(),
            BufferKind::Framebuffer
        );
        assert_eq!(BufferTarget::Renderbuffer.kind(), BufferKind::Renderbuffer);
    }

    #[test]
    fn closed_enum_rejects_unknown_values() {
        assert_eq!(CompareFunc::from_gl(0x0201), Some(CompareFunc::Less));
        assert_eq!(CompareFunc::from_gl(0xDEAD), None);
        assert_eq!(BlendFactor::from_gl(0), Some(BlendFactor::Zero));
        assert_eq!(BlendEquation::Add.to_gl(), 0x8006);
    }

    #[test]
    fn open_enum_keeps_extension_values() {
        assert_eq!(Capability::from_gl(0x0B71), Capability::DepthTest);
        let ext = Capability::from_gl(0x8DB9);
        assert_eq!(ext, Capability::Other(0x8DB9));
        assert_eq!(ext.to_gl(), 0x8DB9);
        assert_eq!(TextureParam::from_gl(0x2801), TextureParam::MinFilter);
        assert_eq!(
            TextureParam::Other(0x2801).normalized(),
            TextureParam::MinFilter
        );
    }

    #[test]
    fn texture_unit_names_saturate() {
        assert_eq!(texture_unit(0), TEXTURE0);
        assert_eq!(texture_unit(3), 0x84C3);
        assert_eq!(texture_unit(u32::MAX), u32::MAX);
    }

    #[test]
    fn discard_attachments_follow_flag_order() {
        assert!(DiscardBuffers::empty().attachments().is_empty());
        let all = DiscardBuffers::COLOUR
            | DiscardBuffers::DEPTH
            | DiscardBuffers::STENCIL;
        assert_eq!(all.attachments(), vec![0x1800, 0x1801, 0x1802]);
        assert_eq!(DiscardBuffers::DEPTH.attachments(), vec![0x1801]);
    }
}
