// Example: a fling that jumps by items, polled from a frame loop.
use axial::{ItemSource, LayoutOptions, Orientation, Vector3};
use axial_scroller::{LayoutList, ScrollController, ScrollerOptions};

struct Rows;

impl ItemSource for Rows {
    fn item_count(&self) -> usize {
        200
    }

    fn measure(&mut self, _data_index: usize) -> Vector3 {
        Vector3::new(320.0, 24.0, 0.0)
    }
}

fn main() -> Result<(), axial_scroller::ScrollError> {
    let list = LayoutList::new(
        LayoutOptions::new(Orientation::Vertical).with_viewport(Vector3::new(320.0, 480.0, 0.0)),
        Rows,
    )?;
    let mut c = ScrollController::new(list, ScrollerOptions::new())?;

    // An upward swipe: negative velocity moves forward through the items.
    let request = c.fling_to_position(-40_000.0, 0);
    println!(
        "request={request:?} target={}",
        c.current_item_index()
    );

    let mut now_ms = 0u64;
    while let Some(position) = c.tick(now_ms) {
        println!("t={now_ms} integrator={position:.2}");
        now_ms += 16;
    }

    // A gesture fling on the viewport itself.
    let request = c.fling(0.0, 12_000.0, 0.0);
    println!(
        "offset fling: request={request:?} current={} scroll_position={}",
        c.current_item_index(),
        c.list().scroll_position()
    );
    Ok(())
}
