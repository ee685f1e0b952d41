use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use clap::Args;
use inspector_core::color::Sample;
use inspector_core::config::InspectorConfig;
use inspector_core::inspector::Inspector;
use inspector_core::labels;

use super::load_inspector;

/// Canvas-relative point given as `X,Y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl FromStr for Point {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected X,Y but got '{s}'"))?;
        let point = Point {
            x: x.trim().parse()?,
            y: y.trim().parse()?,
        };
        if !point.x.is_finite() || !point.y.is_finite() {
            bail!("coordinates must be finite numbers, got '{s}'");
        }
        Ok(point)
    }
}

#[derive(Args)]
pub struct SampleArgs {
    /// Image URL, data URL or file path
    pub source: String,

    /// Canvas point to click, as X,Y (repeatable)
    #[arg(long = "at", required = true, value_parser = clap::value_parser!(Point))]
    pub points: Vec<Point>,
}

/// Click each point in order. Points with no readable pixel are skipped.
fn click_points(inspector: &mut Inspector, points: &[Point]) -> Vec<Sample> {
    inspector.pointer_entered();
    points
        .iter()
        .filter_map(|point| inspector.pointer_clicked(point.x, point.y))
        .collect()
}

pub fn run(args: &SampleArgs, config: &InspectorConfig) -> Result<()> {
    let mut inspector = load_inspector(&args.source, config)?;

    for sample in click_points(&mut inspector, &args.points) {
        println!("{}", labels::clicked_line(&sample));
        println!("{}", labels::coordinates_line(&sample));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};
    use inspector_core::color::{PixelCoord, SampledColor};
    use inspector_core::source::DataUrl;

    use super::*;

    fn red_inspector() -> Inspector {
        let mut png = Cursor::new(Vec::new());
        RgbaImage::from_pixel(400, 300, Rgba([255, 0, 0, 255]))
            .write_to(&mut png, ImageFormat::Png)
            .unwrap();
        let source = DataUrl::encode("image/png", png.get_ref());
        load_inspector(&source, &InspectorConfig::default()).unwrap()
    }

    #[test]
    fn test_point_parsing() {
        assert_eq!(
            " 3.5, 4".parse::<Point>().unwrap(),
            Point { x: 3.5, y: 4.0 }
        );
        assert!("12".parse::<Point>().is_err());
        assert!("a,b".parse::<Point>().is_err());
    }

    #[test]
    fn test_point_rejects_non_finite() {
        assert!("NaN,NaN".parse::<Point>().is_err());
        assert!("inf,1".parse::<Point>().is_err());
        assert!("1,-inf".parse::<Point>().is_err());
    }

    #[test]
    fn test_unreadable_points_are_skipped() {
        let mut inspector = red_inspector();
        let points = [
            Point { x: 10.0, y: 10.0 },
            Point { x: 500.0, y: 10.0 },
            Point { x: f32::NAN, y: f32::NAN },
        ];

        let samples = click_points(&mut inspector, &points);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].coord, PixelCoord::new(10, 10));
        assert_eq!(samples[0].color, SampledColor::new(255, 0, 0, 255));
    }
}
