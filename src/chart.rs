//! PNG rendering of the burden curves.

use crate::curve::CurvePoint;
use crate::error::{Error, Result};
use crate::tax::{Category, TaxYear};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use plotters::style::register_font;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::io::Cursor;
use std::sync::OnceLock;

pub const WIDTH: u32 = 700;
pub const HEIGHT: u32 = 500;

/// Upper bound of the y axis unless overridden.
pub const DEFAULT_Y_MAX: f64 = 0.5;

const FONT_FAMILY: &str = "sans-serif";
const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
const TITLE_HEIGHT: u32 = 52;

const COMPANY_COLOR: RGBColor = RGBColor(31, 119, 180);
const INDIVIDUAL_COLOR: RGBColor = RGBColor(255, 127, 14);

/// What a chart shows besides the curve itself.
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec {
    pub year: TaxYear,
    pub category: Category,
    /// Right end of the x axis, normally the top of the gross range
    pub x_max: f64,
    pub y_max: f64,
}

impl ChartSpec {
    pub fn new(year: TaxYear, category: Category, gross_max: Decimal) -> Self {
        ChartSpec {
            year,
            category,
            x_max: gross_max.to_f64().unwrap_or(f64::MAX),
            y_max: DEFAULT_Y_MAX,
        }
    }

    pub fn title_lines(&self) -> [String; 2] {
        let have = if self.category.is_citizen() {
            "HAVE"
        } else {
            "DO NOT HAVE"
        };
        [
            format!(
                "Percentage of income to be paid in taxes and other expenses in {},",
                self.year
            ),
            format!("if you {have} EU citizenship or permanent residence permit"),
        ]
    }
}

fn ensure_font() -> Result<()> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    let registered = *REGISTERED
        .get_or_init(|| register_font(FONT_FAMILY, FontStyle::Normal, FONT_DATA).is_ok());
    if registered {
        Ok(())
    } else {
        Err(Error::Font)
    }
}

/// Render the curve and encode it as PNG.
pub fn render_png(curve: &[CurvePoint], spec: &ChartSpec) -> Result<Vec<u8>> {
    ensure_font()?;

    let mut pixels = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    draw(&mut pixels, curve, spec).map_err(|e| Error::Render(e.to_string()))?;

    let image = RgbImage::from_raw(WIDTH, HEIGHT, pixels)
        .ok_or_else(|| Error::Render("pixel buffer does not match chart size".to_string()))?;
    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    log::debug!("Encoded {}x{} chart into {} bytes", WIDTH, HEIGHT, png.len());
    Ok(png)
}

fn draw(
    pixels: &mut [u8],
    curve: &[CurvePoint],
    spec: &ChartSpec,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::with_buffer(pixels, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let (header, body) = root.split_vertically(TITLE_HEIGHT);
    let title_style =
        TextStyle::from((FONT_FAMILY, 15).into_font()).pos(Pos::new(HPos::Center, VPos::Top));
    for (i, line) in spec.title_lines().iter().enumerate() {
        header.draw_text(line, &title_style, (WIDTH as i32 / 2, 8 + 20 * i as i32))?;
    }

    let mut chart = ChartBuilder::on(&body)
        .margin(10)
        .margin_right(30)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..spec.x_max, 0f64..spec.y_max)?;

    chart
        .configure_mesh()
        .bold_line_style(BLACK.mix(0.8))
        .light_line_style(RED.mix(0.1))
        .x_desc("Monthly gross income in BGN")
        .y_desc("Percentage of income to be paid in taxes etc")
        .x_label_formatter(&gross_tick)
        .y_label_formatter(&percent_tick)
        .label_style((FONT_FAMILY, 12))
        .axis_desc_style((FONT_FAMILY, 13))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            visible(curve, spec.y_max, |p| p.company),
            COMPANY_COLOR.stroke_width(2),
        ))?
        .label("Dividends from Company")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], COMPANY_COLOR.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            visible(curve, spec.y_max, |p| p.individual),
            INDIVIDUAL_COLOR.stroke_width(2),
        ))?
        .label("Individual")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], INDIVIDUAL_COLOR.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT_FAMILY, 12))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()?;

    root.present()?;
    Ok(())
}

fn gross_tick(value: &f64) -> String {
    format!("{:.0}", value)
}

fn percent_tick(value: &f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Samples of one series which fall inside the y axis.
fn visible<F>(curve: &[CurvePoint], y_max: f64, burden: F) -> Vec<(f64, f64)>
where
    F: Fn(&CurvePoint) -> Decimal,
{
    curve
        .iter()
        .filter_map(|p| Some((p.gross.to_f64()?, burden(p).to_f64()?)))
        .filter(|(_, y)| (0.0..=y_max).contains(y))
        .collect()
}
