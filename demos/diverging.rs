use canvas_charts::{
    prelude::*, Backdrop, ConnectorKind, DataSeries, DataSet, DivergingChart, ValuePoint,
    ValuePosition,
};
use piet::{
    kurbo::{Point, Rect, Size},
    Color,
};
use piet_common::{Device, RenderContext};
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 720;
const HEIGHT: usize = 480;

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut device = Device::new()?;
    let mut bitmap = device.bitmap_target(WIDTH * 2, HEIGHT * 2, 2.0)?;
    let mut rc = bitmap.render_context();
    let size = Size::new(WIDTH as f64, HEIGHT as f64);

    rc.fill(Rect::from_origin_size(Point::ZERO, size), &Color::WHITE);

    let mut chart = DivergingChart::new(DataSet::default());
    let buys: DataSeries = MONTHS
        .iter()
        .zip([40., 25., -10., 60., -35., 15.])
        .map(|(month, v)| ValuePoint::with_payload(v, *month))
        .collect();
    let sells = DataSeries::from([20., -15., -30., 10., -40., 35.]);
    chart.set_data(vec![buys, sells])?;
    // too large: logged and ignored
    let _ = chart.set_data(vec![DataSeries::from([90.]), DataSeries::from([90.])]);

    chart.set_label_formatter(|point: &ValuePoint, idx: usize| {
        point
            .payload::<&str>()
            .map(|month| month.to_string())
            .unwrap_or_else(|| idx.to_string())
    });
    chart.style.value_position = ValuePosition::Top;
    chart.style.upper_backdrop = Some(Backdrop::VerticalGradient(
        Color::rgb8(0xe0, 0xf2, 0xf1),
        Color::WHITE,
    ));
    chart.style.lower_backdrop = Some(Backdrop::VerticalGradient(
        Color::WHITE,
        Color::rgb8(0xfc, 0xe4, 0xec),
    ));
    chart.style.connectors.enabled = true;
    chart.style.connectors.kind = ConnectorKind::Extended;
    chart.style.connectors.set_extension_dp(4.);
    chart.draw(size, &mut rc)?;

    rc.finish()?;
    std::mem::drop(rc);

    bitmap.save_to_file("diverging.png")?;
    Ok(())
}
