//! Drives a split view controller headlessly: a mail-style stack is laid out
//! at a wide and a narrow width, then paged with a drag and a tap.
//!
//! Run with `RUST_LOG=debug` to see the controller's decisions.

use std::rc::Rc;

use snapsplit::prelude::*;

struct Screen {
    title: &'static str,
    id: u64,
}

impl ViewController for Screen {
    fn view(&self) -> ViewHandle {
        ViewHandle(self.id)
    }

    fn title(&self) -> Option<String> {
        Some(self.title.to_string())
    }

    fn view_will_appear(&self) {
        println!("  {} appears", self.title);
    }

    fn view_did_disappear(&self) {
        println!("  {} disappears", self.title);
    }
}

struct MailLayout;

impl SplitViewControllerDelegate for MailLayout {
    fn column_size_for_view_controller(&self, view_controller: &ViewControllerRef) -> ColumnSize {
        match view_controller.title().as_deref() {
            Some("Message") => ColumnSize::Secondary,
            Some("Attachment") => ColumnSize::Fullscreen,
            _ => ColumnSize::Primary,
        }
    }

    fn will_change_to_display_mode(
        &self,
        display_mode: DisplayMode,
        coordinator: &mut TransitionCoordinator,
    ) {
        println!("display mode -> {:?}", display_mode);
        coordinator.completion(|t| {
            println!(
                "  transition {:?} -> {:?} done at {}pt",
                t.from, t.to, t.container_size.width
            )
        });
    }

    fn did_snap_to_view_controller(&self, view_controller: &ViewControllerRef) {
        println!(
            "snapped to {}",
            view_controller.title().unwrap_or_default()
        );
    }
}

fn screen(title: &'static str, id: u64) -> ViewControllerRef {
    Rc::new(Screen { title, id })
}

fn print_state(controller: &SplitViewController) {
    let visible: Vec<String> = controller
        .visible_view_controllers()
        .iter()
        .filter_map(|vc| vc.title())
        .collect();
    println!(
        "  mode {:?}, offset {:.1}, visible {:?}",
        controller.display_mode(),
        controller.surface().content_offset(),
        visible
    );
    for entry in controller.entries() {
        println!(
            "    {:<10} {:?} -> {:.0}pt",
            entry.view_controller().title().unwrap_or_default(),
            entry.effective_column_size(),
            entry.width()
        );
    }
}

fn run_animation(controller: &mut SplitViewController) {
    let mut frames = 0;
    while controller.advance_frame(1.0 / 60.0) {
        frames += 1;
    }
    println!("  settled after {} frames", frames);
}

fn main() {
    env_logger::init();

    let delegate: Rc<dyn SplitViewControllerDelegate> = Rc::new(MailLayout);
    let mut controller = SplitViewController::new();
    controller.set_delegate(Some(&delegate));

    let mailboxes = screen("Mailboxes", 1);
    let inbox = screen("Inbox", 2);
    let message = screen("Message", 3);
    let attachment = screen("Attachment", 4);

    println!("== wide container");
    controller.layout(Size::new(1100.0, 800.0));
    controller.set_view_controllers(vec![mailboxes.clone(), inbox.clone(), message.clone()]);
    print_state(&controller);

    if let Some(header) = controller.header_bar_for(&message) {
        println!(
            "  header {:?}, back {:?}",
            header.title(),
            header.back_button_title()
        );
    }

    println!("== tap the partially visible message");
    if let Some(partial) = controller.partially_visible_view_controller() {
        if let Some(frame) = controller.frame_for(&partial) {
            controller.tap(Point::new(frame.max_x() - 10.0, 20.0));
            run_animation(&mut controller);
        }
    }
    print_state(&controller);

    println!("== narrow container");
    controller.layout(Size::new(375.0, 800.0));
    print_state(&controller);

    println!("== drag back one page");
    controller.begin_drag();
    controller.drag_by(-120.0);
    controller.end_drag(-900.0);
    run_animation(&mut controller);
    print_state(&controller);

    println!("== open an attachment fullscreen");
    controller.layout(Size::new(1100.0, 800.0));
    controller.set_view_controllers(vec![mailboxes, inbox, message, attachment.clone()]);
    controller.scroll_to_view_controller(&attachment, false);
    print_state(&controller);
}
