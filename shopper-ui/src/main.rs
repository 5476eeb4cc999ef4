//! Shopper browser entry point. Built with `trunk`, see `index.html`.

fn main() {
    shopper_ui::start();
}
