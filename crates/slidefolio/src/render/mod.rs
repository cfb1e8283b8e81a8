pub mod card;
pub mod grid;
pub mod image_cache;
pub mod modal;
pub mod paint;

/// Headless frames for exercising pointer interaction.
#[cfg(test)]
pub(crate) mod testing {
    use eframe::egui::{self, Pos2, Rect};

    pub fn screen() -> Rect {
        Rect::from_min_max(Pos2::ZERO, egui::pos2(1280.0, 800.0))
    }

    /// Run `frame` with the pointer resting on `pos`, then pressing and
    /// releasing the primary button there. Returns one output per frame.
    pub fn click_at<T>(pos: Pos2, mut frame: impl FnMut(&egui::Context) -> T) -> Vec<T> {
        let ctx = egui::Context::default();
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        };
        let steps = [
            vec![egui::Event::PointerMoved(pos)],
            vec![egui::Event::PointerMoved(pos)],
            vec![egui::Event::PointerMoved(pos)],
            vec![button(true)],
            vec![button(false)],
            vec![],
        ];
        let mut outputs = Vec::new();
        for (i, events) in steps.into_iter().enumerate() {
            let input = egui::RawInput {
                screen_rect: Some(screen()),
                time: Some(i as f64 * 0.05),
                events,
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| outputs.push(frame(ctx)));
        }
        outputs
    }
}
