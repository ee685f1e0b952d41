//! Hardcoded user-facing labels.

use crate::color::Sample;
use crate::geometry::NaturalSize;

pub const LOAD_BUTTON: &str = "Загрузить изображение";
pub const BROWSE_BUTTON: &str = "Обзор…";
pub const URL_HINT: &str = "Enter image URL";
pub const SIZE_HEADING: &str = "Размер исходного изображения:";
pub const HOVERED_COLOR: &str = "Наведенный цвет:";
pub const CLICKED_COLOR: &str = "Выбранный цвет:";

pub fn width_line(size: NaturalSize) -> String {
    format!("Ширина: {}", size.width)
}

pub fn height_line(size: NaturalSize) -> String {
    format!("Высота: {}", size.height)
}

pub fn coordinates_line(sample: &Sample) -> String {
    format!("Координаты: X: {},Y: {}", sample.coord.x, sample.coord.y)
}

pub fn hovered_line(sample: &Sample) -> String {
    format!("{HOVERED_COLOR} {}", sample.color)
}

pub fn clicked_line(sample: &Sample) -> String {
    format!("{CLICKED_COLOR} {}", sample.color)
}
