//! Text rendering of the customer view, admin panel and chat widget

use std::fmt::Write;

use menu_core::domain::{Category, ChatMessage, Item, MealTime, Menu, Sender};
use menu_core::gateway::{CatalogGateway, SuggestionGateway};
use menu_core::services::{CatalogStore, ChatSession, Notification};
use menu_shared::{
    constants::{FALLBACK_MESSAGE, FALLBACK_TITLE, MAX_RATING_STARS, PREDEFINED_TAGS},
    utils::format_price,
    EntityId,
};

use crate::app::View;

const APP_TITLE: &str = "Restaurant Menu System";

/// Star `i` is filled while `i < rating`.
pub fn stars(rating: f64) -> String {
    (0..MAX_RATING_STARS)
        .map(|i| if (i as f64) < rating { '★' } else { '☆' })
        .collect()
}

pub fn option_count(count: usize) -> String {
    format!("{} delicious option{}", count, if count == 1 { "" } else { "s" })
}

pub fn item_count(count: usize) -> String {
    format!("{} item{}", count, if count == 1 { "" } else { "s" })
}

pub fn meal_times(times: impl IntoIterator<Item = MealTime>) -> String {
    times.into_iter().map(|t| t.as_str()).collect::<Vec<_>>().join(" • ")
}

pub fn tag_hint() -> String {
    format!("Predefined tags: {}", PREDEFINED_TAGS.join(", "))
}

pub fn nav_bar(view: View) -> String {
    let tab = |label: &str, active: bool| {
        if active {
            format!("[{} (Active)]", label)
        } else {
            format!("[{}]", label)
        }
    };
    format!(
        "{}   {} {}",
        APP_TITLE,
        tab("Customer View", view == View::Customer),
        tab("Admin Panel", view == View::Admin)
    )
}

pub fn home() -> String {
    format!(
        "{}\n\nBrowse the menu with `customer`, manage it with `admin`.\n\
         Ask the menu assistant anything with `ask <question>`. \
         Type `help` for all commands.\n",
        APP_TITLE
    )
}

pub fn fallback() -> String {
    format!(
        "{}\n{}\n\n  reload   start over and load the menus again\n\
         \x20 home     go back to the home screen\n",
        FALLBACK_TITLE, FALLBACK_MESSAGE
    )
}

pub fn notification(notification: &Notification) -> String {
    let marker = if notification.is_failure() { "!" } else { "*" };
    format!("{} {}: {}", marker, notification.title, notification.description)
}

fn menu_tabs(out: &mut String, menus: &[Menu], selected: Option<EntityId>) {
    for menu in menus {
        let marker = if menu.id.is_some() && menu.id == selected { '>' } else { ' ' };
        let id = menu.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        let _ = writeln!(out, " {} [{}] {} ({})", marker, id, menu.name, menu.cuisine);
    }
}

fn customer_item(out: &mut String, item: &Item, now: MealTime) {
    let mut headline = format!("  {}  {}", item.name, format_price(item.price));
    if let Some(rating) = item.rating.filter(|r| *r > 0.0) {
        let _ = write!(headline, "  {}", stars(rating));
        if let Some(count) = item.num_ratings.filter(|n| *n > 0) {
            let _ = write!(headline, " ({})", count);
        }
    }
    if item.is_available_at(now) {
        headline.push_str("  [Available Now]");
    }
    let _ = writeln!(out, "{}", headline);

    if !item.description.is_empty() {
        let _ = writeln!(out, "    {}", item.description);
    }
    if let Some(line) = item.ingredients_line() {
        let _ = writeln!(out, "    {}", line);
    }
    if !item.tags.is_empty() {
        let tags: Vec<&str> = item.tags.iter().map(String::as_str).collect();
        let _ = writeln!(out, "    {}", tags.join(", "));
    }

    let mut details = Vec::new();
    if let Some(calories) = item.calories {
        details.push(format!("{} cal", calories));
    }
    if let Some(level) = item.spice_level.filter(|l| *l > 1) {
        details.push(format!("🌶️ {}/5", level));
    }
    if !item.available_times.is_empty() {
        details.push(meal_times(item.available_times.iter().copied()));
    }
    if !details.is_empty() {
        let _ = writeln!(out, "    {}", details.join("   "));
    }
}

fn customer_category(out: &mut String, category: &Category, now: MealTime) {
    let _ = writeln!(out, "\n## {}  ({})", category.name, option_count(category.items.len()));
    if category.items.is_empty() {
        let _ = writeln!(out, "  No items available in this category yet.");
    }
    for item in &category.items {
        customer_item(out, item, now);
    }
}

/// `hour` is the local hour used for the "Available Now" badge.
pub fn customer<G: CatalogGateway>(store: &CatalogStore<G>, hour: u32) -> String {
    let mut out = String::new();
    let now = MealTime::from_hour(hour);

    menu_tabs(&mut out, store.menus(), store.selected_menu_id());

    let Some(menu) = store.selected_menu().filter(|m| !m.categories.is_empty()) else {
        out.push_str(
            "\nMenu Coming Soon\n\
             We're preparing something delicious for you. Please check back soon!\n",
        );
        return out;
    };

    let _ = write!(out, "\n# {}  {}", menu.name, menu.cuisine);
    if !menu.age_group.is_empty() {
        let _ = write!(out, "  ({})", menu.age_group);
    }
    out.push('\n');
    if !menu.available_times.is_empty() {
        let times: Vec<&str> = menu.available_times.iter().map(String::as_str).collect();
        let _ = writeln!(out, "Served: {}", times.join(", "));
    }
    if let Some(menu_id) = menu.id {
        for category in store.categories_in_display_order(menu_id) {
            customer_category(&mut out, category, now);
        }
    }
    out
}

pub fn admin<G: CatalogGateway>(store: &CatalogStore<G>) -> String {
    let mut out = String::from("Menus\n");
    menu_tabs(&mut out, store.menus(), store.selected_menu_id());

    let Some(menu) = store.selected_menu() else {
        out.push_str(
            "\nNo menu selected\n\
             Select a menu with `menu <id>` or create one with `add-menu`.\n",
        );
        return out;
    };

    let _ = writeln!(out, "\n# {}\nManage categories and menu items\n\nCategories", menu.name);
    let categories = menu.id.map(|id| store.categories_in_display_order(id)).unwrap_or_default();
    if categories.is_empty() {
        out.push_str(
            "\nNo categories yet\n\
             Start by adding your first category to organize your menu items.\n",
        );
        return out;
    }

    for category in categories {
        let marker = if category.id.is_some() && category.id == store.selected_category_id() {
            '>'
        } else {
            ' '
        };
        let id = category.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        let _ = writeln!(
            out,
            "{} [{}] {}  ({})",
            marker,
            id,
            category.name,
            item_count(category.items.len())
        );
        for item in &category.items {
            let id = item.id.map_or_else(|| "-".to_string(), |id| id.to_string());
            let _ = write!(out, "     [{}] {}  {}", id, item.name, format_price(item.price));
            if !item.tags.is_empty() {
                let tags: Vec<&str> = item.tags.iter().map(String::as_str).collect();
                let _ = write!(out, "  {}", tags.join(", "));
            }
            out.push('\n');
            if let Some(line) = item.ingredients_line() {
                let _ = writeln!(out, "         {}", line);
            }
        }
    }
    out
}

fn chat_line(message: &ChatMessage) -> String {
    let who = match message.sender {
        Sender::User => "You",
        Sender::Bot => "Assistant",
    };
    format!("{}: {}", who, message.content)
}

pub fn chat<S: SuggestionGateway>(session: &ChatSession<S>) -> String {
    let mut out = String::from("--- Menu Assistant ---\n");
    for message in session.messages() {
        let _ = writeln!(out, "{}", chat_line(message));
    }
    if session.is_loading() {
        out.push_str("Assistant is typing...\n");
    }
    out
}
