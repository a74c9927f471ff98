//! Host-side mirror of the driver context state.

use glam::{BVec4, Vec4};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::gl::{
    BlendEquation, BlendFactor, BufferTarget, Capability, CompareFunc,
    CullFace, DiscardBuffers, PolygonMode, TextureParam,
};

/// Sampler parameters recorded for one texture handle.
pub(super) type TextureParams = FxHashMap<TextureParam, i32>;

/// Last-known value of every slot the cache tracks.
///
/// [`Default`] yields the state of a freshly created GLES context.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedState {
    pub(super) buffers: FxHashMap<BufferTarget, u32>,
    pub(super) textures: FxHashMap<u32, TextureParams>,
    pub(super) enabled: FxHashSet<Capability>,
    pub(super) active_texture_unit: u32,
    pub(super) last_bound_texture: u32,
    pub(super) cull_face: CullFace,
    pub(super) polygon_mode: PolygonMode,
    pub(super) depth_func: CompareFunc,
    pub(super) depth_mask: bool,
    pub(super) stencil_mask: u32,
    pub(super) blend_src: BlendFactor,
    pub(super) blend_dst: BlendFactor,
    pub(super) blend_equation: BlendEquation,
    pub(super) clear_depth: f32,
    pub(super) clear_colour: Vec4,
    pub(super) colour_mask: BVec4,
    pub(super) discard_buffers: DiscardBuffers,
}

impl Default for CachedState {
    fn default() -> Self {
        Self {
            buffers: FxHashMap::default(),
            textures: FxHashMap::default(),
            enabled: FxHashSet::default(),
            active_texture_unit: 0,
            last_bound_texture: 0,
            cull_face: CullFace::Back,
            polygon_mode: PolygonMode::Fill,
            depth_func: CompareFunc::Less,
            depth_mask: true,
            stencil_mask: 0xFFFF_FFFF,
            blend_src: BlendFactor::One,
            blend_dst: BlendFactor::Zero,
            blend_equation: BlendEquation::Add,
            clear_depth: 1.0,
            clear_colour: Vec4::ZERO,
            colour_mask: BVec4::TRUE,
            discard_buffers: DiscardBuffers::empty(),
        }
    }
}

impl CachedState {
    /// Handle last bound at `target`, `None` if the target was never
    /// bound through the cache.
    #[must_use]
    pub fn bound_buffer(&self, target: BufferTarget) -> Option<u32> {
        self.buffers.get(&target).copied()
    }

    /// Value last set for `param` while `texture` was the bound texture.
    #[must_use]
    pub fn texture_param(&self, texture: u32, param: TextureParam) -> Option<i32> {
        self.textures
            .get(&texture)
            .and_then(|params| params.get(&param.normalized()))
            .copied()
    }

    /// Number of textures with at least one recorded parameter map.
    #[must_use]
    pub fn tracked_textures(&self) -> usize {
        self.textures.len()
    }

    /// Whether `capability` is enabled.
    #[must_use]
    pub fn is_enabled(&self, capability: Capability) -> bool {
        self.enabled.contains(&capability.normalized())
    }

    /// Enabled capabilities, in no particular order.
    pub fn enabled_capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
        self.enabled.iter().copied()
    }

    /// Active texture unit index.
    #[must_use]
    pub fn active_texture_unit(&self) -> u32 {
        self.active_texture_unit
    }

    /// Texture most recently bound through the cache.
    #[must_use]
    pub fn last_bound_texture(&self) -> u32 {
        self.last_bound_texture
    }

    /// Culled faces.
    #[must_use]
    pub fn cull_face(&self) -> CullFace {
        self.cull_face
    }

    /// Polygon rasterization mode.
    #[must_use]
    pub fn polygon_mode(&self) -> PolygonMode {
        self.polygon_mode
    }

    /// Depth comparison function.
    #[must_use]
    pub fn depth_func(&self) -> CompareFunc {
        self.depth_func
    }

    /// Depth write mask.
    #[must_use]
    pub fn depth_mask(&self) -> bool {
        self.depth_mask
    }

    /// Stencil write mask.
    #[must_use]
    pub fn stencil_mask(&self) -> u32 {
        self.stencil_mask
    }

    /// Blend `(source, destination)` factors.
    #[must_use]
    pub fn blend_func(&self) -> (BlendFactor, BlendFactor) {
        (self.blend_src, self.blend_dst)
    }

    /// Blend equation.
    #[must_use]
    pub fn blend_equation(&self) -> BlendEquation {
        self.blend_equation
    }

    /// Depth clear value.
    #[must_use]
    pub fn clear_depth(&self) -> f32 {
        self.clear_depth
    }

    /// Colour clear value.
    #[must_use]
    pub fn clear_colour(&self) -> Vec4 {
        self.clear_colour
    }

    /// Per-channel colour write mask.
    #[must_use]
    pub fn colour_mask(&self) -> BVec4 {
        self.colour_mask
    }

    /// Attachments to discard at the end of the frame.
    #[must_use]
    pub fn discard_buffers(&self) -> DiscardBuffers {
        self.discard_buffers
    }
}
