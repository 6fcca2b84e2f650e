/// Digit raster widget
/// Draws an 8x8 intensity grid as a reversed grayscale matrix (blank = white, ink = black)
use iced::widget::canvas::{self, Cache};
use iced::{Color, Point, Rectangle, Size};

use crate::dataset::loader::MAX_INTENSITY;
use crate::state::data::ImageRecord;
use crate::Message;

/// Canvas program for the image currently being labeled
pub struct DigitRaster {
    record: Option<ImageRecord>,
    /// Drawn geometry for `record`; cleared whenever the image changes
    cache: Cache,
}

impl DigitRaster {
    pub fn new(record: ImageRecord) -> Self {
        Self {
            record: Some(record),
            cache: Cache::new(),
        }
    }

    /// Swap in a new image and drop the geometry of the previous one
    pub fn show(&mut self, record: ImageRecord) {
        self.cache.clear();
        self.record = Some(record);
    }

    pub fn record(&self) -> Option<&ImageRecord> {
        self.record.as_ref()
    }
}

/// Map an intensity to its reversed-grayscale shade
pub fn shade(intensity: u8) -> f32 {
    1.0 - (intensity.min(MAX_INTENSITY) as f32 / MAX_INTENSITY as f32)
}

impl canvas::Program<Message> for DigitRaster {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let Some(record) = &self.record else {
            return vec![];
        };

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            // Square cells, sized by the shorter side
            let cell = (bounds.width / record.width as f32).min(bounds.height / record.height as f32);

            for row in 0..record.height {
                for col in 0..record.width {
                    let v = shade(record.intensity(row, col));
                    frame.fill_rectangle(
                        Point::new(col as f32 * cell, row as f32 * cell),
                        Size::new(cell, cell),
                        Color::from_rgb(v, v, v),
                    );
                }
            }
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(target: u8) -> ImageRecord {
        ImageRecord {
            id: target as usize,
            width: 8,
            height: 8,
            pixels: vec![0; 64],
            target,
        }
    }

    #[test]
    fn test_shade_is_reversed() {
        assert_eq!(shade(0), 1.0);
        assert_eq!(shade(16), 0.0);
        assert_eq!(shade(8), 0.5);
        // Out-of-range values clamp to full ink
        assert_eq!(shade(200), 0.0);
    }

    #[test]
    fn test_show_replaces_record() {
        let mut raster = DigitRaster::new(record(1));
        assert_eq!(raster.record().map(|r| r.target), Some(1));

        raster.show(record(2));
        assert_eq!(raster.record().map(|r| r.target), Some(2));
    }
}
