// Example: page through a layout-backed list and listen for page changes.
use std::sync::Arc;

use axial::{ItemSource, LayoutOptions, Orientation, Vector3};
use axial_scroller::{
    LayoutList, OnPageChangedListener, OnScrollListener, ScrollController, ScrollerOptions,
};

struct Tiles;

impl ItemSource for Tiles {
    fn item_count(&self) -> usize {
        10
    }

    fn measure(&mut self, _data_index: usize) -> Vector3 {
        Vector3::new(100.0, 100.0, 0.0)
    }
}

struct Logger;

impl OnScrollListener for Logger {
    fn on_scroll_finished(&self, index: usize) {
        println!("scrolled to item {index}");
    }
}

impl OnPageChangedListener for Logger {
    fn on_page_changed(&self, page: usize) {
        println!("page {page}");
    }
}

fn main() -> Result<(), axial_scroller::ScrollError> {
    let list = LayoutList::new(
        LayoutOptions::new(Orientation::Horizontal).with_viewport(Vector3::new(300.0, 100.0, 0.0)),
        Tiles,
    )?;
    let mut c = ScrollController::new(list, ScrollerOptions::new().with_page_size(3))?;
    let logger = Arc::new(Logger);
    c.add_scroll_listener(logger.clone());
    c.add_page_changed_listener(logger);

    println!("pages={}", c.page_count());
    while c.scroll_to_next_page()?.is_some() {
        println!(
            "current={} page={} scroll_position={}",
            c.current_item_index(),
            c.current_page(),
            c.list().scroll_position()
        );
    }
    Ok(())
}
