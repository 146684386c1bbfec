//! Mini-Pager CLI (for testing purposes only)
//! The main interface is through WASM bindings.

use mini_pager::{Configuration, MemoryHost, NavAction, PaginationController};

fn main() -> mini_pager::Result<()> {
    println!("Mini-Pager Navigation Control");
    println!("=============================");
    println!();

    let host = MemoryHost::with_container("#pager");
    let config = Configuration::new("#pager").with_total(23).with_step(3);
    let mut controller = PaginationController::mount(&host, config)?;
    controller.on_select(|page| println!("  -> selected page {}", page));

    let script = [
        NavAction::Next,
        NavAction::Next,
        NavAction::Select(9),
        NavAction::Last,
        NavAction::Prev,
        NavAction::First,
    ];

    print_state("mount", &controller);
    for action in script {
        let rendered = controller.dispatch(action);
        let label = format!("{:?}{}", action, if rendered { "" } else { " (no-op)" });
        print_state(&label, &controller);
    }

    println!();
    println!("To use in a page:");
    println!("  1. Build WASM: wasm-pack build --target web");
    println!("  2. new WasmPagination({{ container: \"#pager\", total: 25 }})");
    Ok(())
}

fn print_state(label: &str, controller: &PaginationController<mini_pager::MemorySurface>) {
    let pages: Vec<String> = controller
        .render_list()
        .pages()
        .map(|page| {
            if page == controller.current_page() {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect();
    println!(
        "{:<12} start={:<3} {}",
        label,
        controller.window_start(),
        pages.join(" ")
    );
}
