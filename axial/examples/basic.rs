// Example: measure a vertical list until the viewport is full, then scroll it.
use axial::{ItemSource, Layout, LayoutOptions, LinearLayout, Orientation, Vector3};

struct Rows;

impl ItemSource for Rows {
    fn item_count(&self) -> usize {
        1_000
    }

    fn measure(&mut self, data_index: usize) -> Vector3 {
        // Every third row is a taller header.
        let height = if data_index % 3 == 0 { 32.0 } else { 20.0 };
        Vector3::new(320.0, height, 0.0)
    }
}

fn main() -> Result<(), axial::LayoutError> {
    let mut layout = LinearLayout::new(
        LayoutOptions::new(Orientation::Vertical)
            .with_divider_padding(4.0)
            .with_viewport(Vector3::new(320.0, 200.0, 0.0)),
    )?;
    let mut rows = Rows;

    let measured = layout.measure_until_full(&mut rows, 0)?;
    println!("measured={measured} total={}", layout.cache().total_size());

    layout.for_each_visible_child(|i, pos| println!("row {i} at y={}", pos.y))?;

    layout.set_offset(Vector3::new(0.0, -50.0, 0.0));
    println!("after scroll: visible={:?}", layout.visible_range());
    println!("center child={}", layout.center_child());
    Ok(())
}
