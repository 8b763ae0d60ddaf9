//! # Terminal Front End
//!
//! Renders controller state and drives it from the keyboard. Two surfaces
//! share the same controller:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  interactive()   menu loop: list, add, edit, delete, filter, show all  │
//! │  run_command()   one subcommand, then exit (scriptable)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Blocking alerts (validation, fatal) wait for a key press in the
//! interactive screen.

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tienda_core::{ProductCard, ProductForm};
use tienda_db::ProductStore;

use crate::cli::{AddArgs, Command, EditArgs};
use crate::config::AppConfig;
use crate::controller::{Alert, AlertKind, ScreenController};
use crate::error::{AppError, AppResult};

// =============================================================================
// Rendering
// =============================================================================

/// One card as printed: id and title, then the three labels.
pub fn render_card(card: &ProductCard) -> String {
    format!(
        "{} {}\n    {}\n    {}\n    {}",
        style(format!("#{}", card.id)).dim(),
        style(&card.title).bold(),
        card.price_label,
        card.stock_label,
        card.category_label,
    )
}

pub fn render_list(cards: &[ProductCard], active_filter: Option<&str>) -> String {
    let mut out = match active_filter {
        Some(category) => format!(
            "{} {}\n",
            style("Products").bold().underlined(),
            style(format!("(category: {})", category)).dim()
        ),
        None => format!("{}\n", style("Products").bold().underlined()),
    };

    if cards.is_empty() {
        out.push_str(&format!("{}\n", style("No products.").dim()));
    }
    for card in cards {
        out.push_str(&render_card(card));
        out.push('\n');
    }
    out
}

pub fn render_alert(alert: &Alert) -> String {
    let head = match alert.kind {
        AlertKind::Success => style(format!("✓ {}", alert.message)).green(),
        AlertKind::Validation => style(format!("! {}: {}", alert.title, alert.message)).yellow(),
        AlertKind::Error => style(format!("✗ {}: {}", alert.title, alert.message)).red(),
        AlertKind::Fatal => style(format!("✗ {}: {}", alert.title, alert.message)).red().bold(),
    };

    match &alert.detail {
        Some(detail) => format!("{}\n  {}", head, style(detail).dim()),
        None => head.to_string(),
    }
}

/// Prints an alert: successes to stdout, everything else to stderr.
pub fn show_alert(alert: &Alert) {
    if alert.kind == AlertKind::Success {
        println!("{}", render_alert(alert));
    } else {
        eprintln!("{}", render_alert(alert));
    }
}

/// Turns a non-success alert into an exit error, after it has been shown.
fn into_result(alert: Alert) -> AppResult<()> {
    show_alert(&alert);
    match alert.kind {
        AlertKind::Success => Ok(()),
        _ => Err(AppError::Rejected(alert.message)),
    }
}

// =============================================================================
// One-shot Commands
// =============================================================================

pub async fn run_command<S: ProductStore>(
    command: Command,
    controller: &mut ScreenController<S>,
    config: &AppConfig,
) -> AppResult<()> {
    match command {
        Command::Interactive => interactive(controller, config).await,

        Command::List { category, json } => {
            if let Some(category) = category {
                controller.set_filter(category);
                if let Err(alert) = controller.apply_filter().await {
                    return into_result(alert);
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(controller.products())?);
            } else {
                let cards = controller.cards(&config.display.currency_symbol);
                print!("{}", render_list(&cards, controller.active_filter()));
            }
            Ok(())
        }

        Command::Add(args) => add_from_args(args, controller).await,

        Command::Edit(args) => edit_from_args(args, controller).await,

        Command::Delete { id, yes } => {
            let confirmation = match controller.request_delete(id) {
                Ok(confirmation) => confirmation,
                Err(alert) => return into_result(alert),
            };

            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(confirmation.message)
                    .default(false)
                    .interact()?;

            if confirmed {
                into_result(controller.confirm_delete().await)
            } else {
                controller.cancel_delete();
                println!("{}", style("Nothing deleted.").dim());
                Ok(())
            }
        }
    }
}

pub async fn add_from_args<S: ProductStore>(
    args: AddArgs,
    controller: &mut ScreenController<S>,
) -> AppResult<()> {
    *controller.form_mut() = ProductForm {
        name: args.name,
        price: args.price,
        stock: args.stock,
        category: args.category,
    };
    into_result(controller.add().await)
}

pub async fn edit_from_args<S: ProductStore>(
    args: EditArgs,
    controller: &mut ScreenController<S>,
) -> AppResult<()> {
    if let Err(alert) = controller.begin_edit(args.id) {
        return into_result(alert);
    }

    if let Some(form) = controller.edit_form_mut() {
        if let Some(name) = args.name {
            form.name = name;
        }
        if let Some(price) = args.price {
            form.price = price;
        }
        if let Some(stock) = args.stock {
            form.stock = stock;
        }
        if let Some(category) = args.category {
            form.category = category;
        }
    }

    into_result(controller.save_edit().await)
}

// =============================================================================
// Interactive Screen
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Add,
    Edit,
    Delete,
    Filter,
    ShowAll,
    Quit,
}

const MENU: [(MenuItem, &str); 6] = [
    (MenuItem::Add, "Add product"),
    (MenuItem::Edit, "Edit product"),
    (MenuItem::Delete, "Delete product"),
    (MenuItem::Filter, "Filter by category"),
    (MenuItem::ShowAll, "Show all"),
    (MenuItem::Quit, "Quit"),
];

pub async fn interactive<S: ProductStore>(
    controller: &mut ScreenController<S>,
    config: &AppConfig,
) -> AppResult<()> {
    let theme = ColorfulTheme::default();
    let term = Term::stderr();
    let labels: Vec<&str> = MENU.iter().map(|(_, label)| *label).collect();

    loop {
        let cards = controller.cards(&config.display.currency_symbol);
        println!();
        print!("{}", render_list(&cards, controller.active_filter()));
        println!();

        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let outcome = match MENU[choice].0 {
            MenuItem::Add => add_interactive(controller, &theme).await?,
            MenuItem::Edit => edit_interactive(controller, &theme, &cards).await?,
            MenuItem::Delete => delete_interactive(controller, &theme, &cards).await?,
            MenuItem::Filter => {
                let text = Input::<String>::with_theme(&theme)
                    .with_prompt("Category (blank for all)")
                    .with_initial_text(controller.filter())
                    .allow_empty(true)
                    .interact_text()?;
                controller.set_filter(text);
                controller.apply_filter().await.err()
            }
            MenuItem::ShowAll => controller.show_all().await.err(),
            MenuItem::Quit => return Ok(()),
        };

        if let Some(alert) = outcome {
            show_alert(&alert);
            if alert.is_blocking() {
                eprintln!("{}", style("Press any key to continue").dim());
                term.read_key()?;
            }
        }
    }
}

fn prompt_form(theme: &ColorfulTheme, form: &ProductForm) -> AppResult<ProductForm> {
    let name = Input::<String>::with_theme(theme)
        .with_prompt("Name")
        .with_initial_text(form.name.as_str())
        .allow_empty(true)
        .interact_text()?;
    let price = Input::<String>::with_theme(theme)
        .with_prompt("Price")
        .with_initial_text(form.price.as_str())
        .allow_empty(true)
        .interact_text()?;
    let stock = Input::<String>::with_theme(theme)
        .with_prompt("Stock")
        .with_initial_text(form.stock.as_str())
        .allow_empty(true)
        .interact_text()?;
    let category = Input::<String>::with_theme(theme)
        .with_prompt("Category")
        .with_initial_text(form.category.as_str())
        .allow_empty(true)
        .interact_text()?;

    Ok(ProductForm {
        name,
        price,
        stock,
        category,
    })
}

/// Shows why a form was rejected and asks whether to try again.
fn retry(theme: &ColorfulTheme, alert: &Alert) -> AppResult<bool> {
    show_alert(alert);
    Ok(Confirm::with_theme(theme)
        .with_prompt("Correct and try again?")
        .default(true)
        .interact()?)
}

async fn add_interactive<S: ProductStore>(
    controller: &mut ScreenController<S>,
    theme: &ColorfulTheme,
) -> AppResult<Option<Alert>> {
    loop {
        let form = prompt_form(theme, controller.form())?;
        *controller.form_mut() = form;

        let alert = controller.add().await;
        if alert.kind != AlertKind::Validation {
            return Ok(Some(alert));
        }
        if !retry(theme, &alert)? {
            return Ok(None);
        }
    }
}

fn pick_product(
    theme: &ColorfulTheme,
    cards: &[ProductCard],
    prompt: &str,
) -> AppResult<Option<i64>> {
    if cards.is_empty() {
        println!("{}", style("No products.").dim());
        return Ok(None);
    }

    let items: Vec<String> = cards
        .iter()
        .map(|c| format!("#{} {}", c.id, c.title))
        .collect();

    let picked = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(picked.map(|i| cards[i].id))
}

async fn edit_interactive<S: ProductStore>(
    controller: &mut ScreenController<S>,
    theme: &ColorfulTheme,
    cards: &[ProductCard],
) -> AppResult<Option<Alert>> {
    let Some(id) = pick_product(theme, cards, "Edit which product? (Esc to go back)")? else {
        return Ok(None);
    };

    if let Err(alert) = controller.begin_edit(id) {
        return Ok(Some(alert));
    }

    loop {
        let current = match controller.editing() {
            Some(session) => session.form.clone(),
            None => return Ok(None),
        };
        let form = prompt_form(theme, &current)?;
        if let Some(edit) = controller.edit_form_mut() {
            *edit = form;
        }

        let alert = controller.save_edit().await;
        if controller.editing().is_none() {
            return Ok(Some(alert));
        }
        if !retry(theme, &alert)? {
            controller.cancel_edit();
            return Ok(None);
        }
    }
}

async fn delete_interactive<S: ProductStore>(
    controller: &mut ScreenController<S>,
    theme: &ColorfulTheme,
    cards: &[ProductCard],
) -> AppResult<Option<Alert>> {
    let Some(id) = pick_product(theme, cards, "Delete which product? (Esc to go back)")? else {
        return Ok(None);
    };

    let confirmation = match controller.request_delete(id) {
        Ok(confirmation) => confirmation,
        Err(alert) => return Ok(Some(alert)),
    };

    let confirmed = Confirm::with_theme(theme)
        .with_prompt(confirmation.message)
        .default(false)
        .interact()?;

    if confirmed {
        Ok(Some(controller.confirm_delete().await))
    } else {
        controller.cancel_delete();
        Ok(None)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
