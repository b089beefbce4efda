use canvas_charts::{prelude::*, GaugeChart, GaugeSegment};
use piet::{
    kurbo::{Point, Rect, Size},
    Color,
};
use piet_common::{Device, RenderContext};
use tracing_subscriber::EnvFilter;

const SIDE: usize = 400;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut device = Device::new()?;
    let mut bitmap = device.bitmap_target(SIDE * 2, SIDE * 2, 2.0)?;
    let mut rc = bitmap.render_context();
    let size = Size::new(SIDE as f64, SIDE as f64);

    rc.fill(Rect::from_origin_size(Point::ZERO, size), &Color::WHITE);

    let mut gauge = GaugeChart::new([0.8, 0.6]);
    gauge.submit(vec![
        GaugeSegment::new(0.8),
        GaugeSegment::new(0.6),
        GaugeSegment::new(0.4).with_colors(Color::rgb8(0xd8, 0x1b, 0x60), Color::grey8(0xdd)),
    ]);
    gauge.draw(size, &mut rc)?;

    rc.finish()?;
    std::mem::drop(rc);

    bitmap.save_to_file("gauge.png")?;
    Ok(())
}
