//! Rasterization of the entity layout into a fixed-size image.
//!
//! Rendering runs in three stages:
//!
//! 1. [`rasterize`] paints entities onto a walled `(size+2)²×3` [`Canvas`]:
//!    the outer ring is `1.0` on every channel, the interior starts at `0.0`.
//! 2. In partial mode, [`Canvas::crop`] cuts a 3×3 window centred on the
//!    agent.
//! 3. [`Canvas::resample_nearest`] scales each channel independently to
//!    84×84, producing the [`Observation`].
//!
//! All buffers are flat `f32` in row-major HWC order.

use gridworld_core::{Entity, EntityCollection, GridError, CHANNEL_COUNT};

/// Observation height in pixels.
pub const OBS_HEIGHT: usize = 84;

/// Observation width in pixels.
pub const OBS_WIDTH: usize = 84;

/// Observation channel count.
pub const OBS_CHANNELS: usize = CHANNEL_COUNT;

/// Side length of the egocentric window in partial mode.
pub const PARTIAL_WINDOW: usize = 3;

/// Value of the wall ring around the grid.
const WALL: f32 = 1.0;

// ── Observation ────────────────────────────────────────────────────

/// An 84×84×3 image observation.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    data: Vec<f32>,
}

impl Observation {
    /// Shape as `[height, width, channels]`.
    pub const SHAPE: [usize; 3] = [OBS_HEIGHT, OBS_WIDTH, OBS_CHANNELS];

    /// Total number of values.
    pub const LEN: usize = OBS_HEIGHT * OBS_WIDTH * OBS_CHANNELS;

    /// Shape as `[height, width, channels]`. Always [`Observation::SHAPE`].
    pub fn shape(&self) -> [usize; 3] {
        Self::SHAPE
    }

    /// Value at `(row, col, channel)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<f32> {
        if row >= OBS_HEIGHT || col >= OBS_WIDTH || channel >= OBS_CHANNELS {
            return None;
        }
        Some(self.data[(row * OBS_WIDTH + col) * OBS_CHANNELS + channel])
    }

    /// One channel as a row-major `OBS_HEIGHT × OBS_WIDTH` plane, or
    /// `None` if `channel` is out of range.
    pub fn channel(&self, channel: usize) -> Option<Vec<f32>> {
        if channel >= OBS_CHANNELS {
            return None;
        }
        let plane = self
            .data
            .iter()
            .skip(channel)
            .step_by(OBS_CHANNELS)
            .copied()
            .collect();
        Some(plane)
    }

    /// Flat HWC buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consume the observation, returning the flat HWC buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

// ── Canvas ─────────────────────────────────────────────────────────

/// Intermediate raster before resampling.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl Canvas {
    /// A walled canvas for a grid of side `size`: `(size+2)²` cells,
    /// outer ring at `1.0`, interior at `0.0`.
    pub fn walled(size: usize) -> Self {
        let dim = size + 2;
        let mut data = vec![0.0; dim * dim * CHANNEL_COUNT];
        for row in 0..dim {
            for col in 0..dim {
                if row == 0 || col == 0 || row == dim - 1 || col == dim - 1 {
                    let base = (row * dim + col) * CHANNEL_COUNT;
                    data[base..base + CHANNEL_COUNT].fill(WALL);
                }
            }
        }
        Self {
            height: dim,
            width: dim,
            data,
        }
    }

    /// Canvas height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Canvas width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Value at `(row, col, channel)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<f32> {
        if row >= self.height || col >= self.width || channel >= CHANNEL_COUNT {
            return None;
        }
        Some(self.data[self.offset(row, col) + channel])
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.width + col) * CHANNEL_COUNT
    }

    /// Paint an entity's footprint, shifted by one cell for the wall.
    ///
    /// Footprints reaching past the canvas are clipped. `entity` must be
    /// well-formed (see [`Entity::validate`]).
    pub fn paint(&mut self, entity: &Entity) {
        let channel = usize::from(entity.channel);
        debug_assert!(channel < CHANNEL_COUNT, "unvalidated entity {entity}");
        let row0 = entity.position.y as usize + 1;
        let col0 = entity.position.x as usize + 1;
        let extent = entity.size as usize;
        let row_end = (row0 + extent).min(self.height);
        let col_end = (col0 + extent).min(self.width);
        for row in row0..row_end {
            for col in col0..col_end {
                let i = self.offset(row, col) + channel;
                self.data[i] = entity.intensity;
            }
        }
    }

    /// Copy the `height × width` window whose top-left cell is
    /// `(row0, col0)`. The window is clipped to the canvas.
    pub fn crop(&self, row0: usize, col0: usize, height: usize, width: usize) -> Canvas {
        let row0 = row0.min(self.height);
        let col0 = col0.min(self.width);
        let row_end = (row0 + height).min(self.height);
        let col_end = (col0 + width).min(self.width);
        let out_h = row_end.saturating_sub(row0);
        let out_w = col_end.saturating_sub(col0);
        let mut data = Vec::with_capacity(out_h * out_w * CHANNEL_COUNT);
        for row in row0..row_end {
            let start = self.offset(row, col0);
            let end = self.offset(row, col_end);
            data.extend_from_slice(&self.data[start..end]);
        }
        Canvas {
            height: out_h,
            width: out_w,
            data,
        }
    }

    /// Nearest-neighbour resample to 84×84, each channel independently.
    ///
    /// Output pixel `(i, j)` takes input cell
    /// `(⌊i·height/84⌋, ⌊j·width/84⌋)`.
    ///
    /// # Panics
    ///
    /// Panics if the canvas has no cells.
    pub fn resample_nearest(&self) -> Observation {
        assert!(self.height > 0 && self.width > 0, "cannot resample an empty canvas");
        let mut data = vec![0.0; Observation::LEN];
        for i in 0..OBS_HEIGHT {
            let src_row = i * self.height / OBS_HEIGHT;
            for j in 0..OBS_WIDTH {
                let src_col = j * self.width / OBS_WIDTH;
                let src = self.offset(src_row, src_col);
                let dst = (i * OBS_WIDTH + j) * OBS_CHANNELS;
                data[dst..dst + OBS_CHANNELS]
                    .copy_from_slice(&self.data[src..src + CHANNEL_COUNT]);
            }
        }
        Observation { data }
    }
}

// ── Rendering ──────────────────────────────────────────────────────

/// Paint every entity in collection order onto a walled canvas.
///
/// Later entities overwrite earlier ones where footprints coincide on
/// the same channel.
pub fn rasterize(size: u32, entities: &EntityCollection) -> Canvas {
    let mut canvas = Canvas::walled(size as usize);
    for entity in entities {
        canvas.paint(entity);
    }
    canvas
}

/// Render the layout into an 84×84×3 observation.
///
/// In partial mode the canvas is cropped to the 3×3 window at canvas
/// rows `y..y+3`, columns `x..x+3`, which centres the agent's cell.
///
/// # Errors
///
/// Returns [`GridError::InvalidLayout`] in partial mode when the layout
/// holds no agent to centre the window on.
pub fn render(
    size: u32,
    partial: bool,
    entities: &EntityCollection,
) -> Result<Observation, GridError> {
    let canvas = rasterize(size, entities);
    if !partial {
        return Ok(canvas.resample_nearest());
    }
    let agent = entities
        .iter()
        .find(|e| e.is_agent())
        .ok_or_else(|| GridError::InvalidLayout {
            reason: "partial view needs an agent".into(),
        })?;
    let window = canvas.crop(
        agent.position.y as usize,
        agent.position.x as usize,
        PARTIAL_WINDOW,
        PARTIAL_WINDOW,
    );
    Ok(window.resample_nearest())
}
