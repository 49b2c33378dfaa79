//! Console command grammar
//!
//! One command per line. Form-like commands take `key=value` fields
//! separated by `|`, e.g. `add-item name=Pad Thai | price=11.50 | tags=Spicy`.

use std::collections::BTreeSet;

use menu_core::domain::{AgeGroup, CategoryDraft, ItemDraft, MealTime, MenuDraft};
use menu_shared::{utils::split_comma_list, EntityId};
use thiserror::Error;

use crate::app::View;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type `help` for the list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Expected key=value, got: {0}")]
    MalformedField(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(Vec<(String, String)>);

impl Fields {
    pub fn parse(raw: &str) -> Result<Self, CommandError> {
        let mut fields = Vec::new();
        for segment in raw.split('|').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, value) = segment
                .split_once('=')
                .ok_or_else(|| CommandError::MalformedField(segment.to_string()))?;
            fields.push((key.trim().to_ascii_lowercase(), value.trim().to_string()));
        }
        Ok(Self(fields))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Show(View),
    Reload,
    SelectMenu(EntityId),
    SelectCategory(EntityId),
    AddMenu(Fields),
    AddCategory(Fields),
    AddItem(Fields),
    EditItem(EntityId, Fields),
    DeleteItem(EntityId),
    Ask(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        match verb.to_ascii_lowercase().as_str() {
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "home" => Ok(Command::Show(View::Home)),
            "customer" => Ok(Command::Show(View::Customer)),
            "admin" => Ok(Command::Show(View::Admin)),
            "reload" => Ok(Command::Reload),
            "menu" => Ok(Command::SelectMenu(parse_id(rest, "menu <id>")?)),
            "category" => Ok(Command::SelectCategory(parse_id(rest, "category <id>")?)),
            "add-menu" => Ok(Command::AddMenu(required_fields(
                rest,
                "add-menu name=.. | cuisine=.. [| times=breakfast,lunch | age=all | image=url]",
            )?)),
            "add-category" => Ok(Command::AddCategory(required_fields(
                rest,
                "add-category name=.. [| position=N]",
            )?)),
            "add-item" => Ok(Command::AddItem(required_fields(
                rest,
                "add-item name=.. | price=.. [| description=.. | ingredients=a, b | tags=.. \
                 | spice=N | calories=N | times=.. | age=..]",
            )?)),
            "edit-item" => {
                const USAGE: &str = "edit-item <id> field=value [| field=value ...]";
                let (id, fields) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Ok(Command::EditItem(parse_id(id, USAGE)?, required_fields(fields, USAGE)?))
            }
            "delete-item" => Ok(Command::DeleteItem(parse_id(rest, "delete-item <id>")?)),
            "ask" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("ask <question>"));
                }
                Ok(Command::Ask(rest.to_string()))
            }
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

pub const HELP: &str = "\
Commands:
  home | customer | admin      switch view
  menu <id>                    select a menu
  category <id>                select a category of the selected menu
  add-menu name=.. | cuisine=.. [| times=breakfast,lunch | age=all | image=url]
  add-category name=.. [| position=N]
  add-item name=.. | price=.. [| description=.. | ingredients=a, b | tags=Vegan,Spicy
           | spice=N | calories=N | times=.. | age=.. | image=url]
  edit-item <id> field=value [| toggle=Tag ...]
  delete-item <id>
  ask <question>               ask the menu assistant
  reload                       reload the catalog
  quit";

fn parse_id(raw: &str, usage: &'static str) -> Result<EntityId, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    raw.parse().map_err(|_| CommandError::InvalidId(raw.to_string()))
}

fn required_fields(raw: &str, usage: &'static str) -> Result<Fields, CommandError> {
    let fields = Fields::parse(raw)?;
    if fields.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    Ok(fields)
}

fn invalid(field: &str, value: &str) -> CommandError {
    CommandError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn parse_times(value: &str) -> Result<BTreeSet<MealTime>, CommandError> {
    split_comma_list(value)
        .iter()
        .map(|t| MealTime::from_str(t).ok_or_else(|| invalid("times", t)))
        .collect()
}

fn parse_age(value: &str) -> Result<AgeGroup, CommandError> {
    AgeGroup::from_str(value).ok_or_else(|| invalid("age", value))
}

fn optional_text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Parses an optional number; an empty value or `none` clears it.
fn optional_number<T: std::str::FromStr>(
    field: &str,
    value: &str,
) -> Result<Option<T>, CommandError> {
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| invalid(field, value))
}

pub fn apply_menu_fields(draft: &mut MenuDraft, fields: &Fields) -> Result<(), CommandError> {
    for (key, value) in fields.iter() {
        match key {
            "name" => draft.name = value.to_string(),
            "cuisine" => draft.cuisine = value.to_string(),
            "age" => draft.age_group = parse_age(value)?,
            "image" => draft.image_url = optional_text(value),
            "times" => draft.available_times = parse_times(value)?,
            other => return Err(CommandError::UnknownField(other.to_string())),
        }
    }
    Ok(())
}

pub fn apply_category_fields(
    draft: &mut CategoryDraft,
    fields: &Fields,
) -> Result<(), CommandError> {
    for (key, value) in fields.iter() {
        match key {
            "name" => draft.name = value.to_string(),
            "position" => draft.position = optional_number("position", value)?,
            other => return Err(CommandError::UnknownField(other.to_string())),
        }
    }
    Ok(())
}

/// Price and ingredients stay raw text; the draft itself validates them.
pub fn apply_item_fields(draft: &mut ItemDraft, fields: &Fields) -> Result<(), CommandError> {
    for (key, value) in fields.iter() {
        match key {
            "name" => draft.name = value.to_string(),
            "description" => draft.description = value.to_string(),
            "price" => draft.price = value.to_string(),
            "ingredients" => draft.ingredients = value.to_string(),
            "tags" => draft.tags = split_comma_list(value).into_iter().collect(),
            "toggle" => draft.toggle_tag(value),
            "image" => draft.image_url = optional_text(value),
            "spice" => draft.spice_level = optional_number("spice", value)?,
            "calories" => draft.calories = optional_number("calories", value)?,
            "times" => draft.available_times = parse_times(value)?,
            "age" => draft.age_group = parse_age(value)?,
            other => return Err(CommandError::UnknownField(other.to_string())),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("  help "), Ok(Command::Help));
        assert_eq!(Command::parse("EXIT"), Ok(Command::Quit));
        assert_eq!(Command::parse("admin"), Ok(Command::Show(View::Admin)));
        assert_eq!(Command::parse("menu 12"), Ok(Command::SelectMenu(12)));
        assert_eq!(Command::parse("delete-item 5"), Ok(Command::DeleteItem(5)));
        assert_eq!(
            Command::parse("ask something  spicy"),
            Ok(Command::Ask("something  spicy".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Command::parse("menu"), Err(CommandError::Usage("menu <id>")));
        assert_eq!(Command::parse("menu abc"), Err(CommandError::InvalidId("abc".to_string())));
        assert!(matches!(Command::parse("ask"), Err(CommandError::Usage(_))));
        assert!(matches!(Command::parse("add-item"), Err(CommandError::Usage(_))));
        assert_eq!(Command::parse("dance"), Err(CommandError::Unknown("dance".to_string())));
        assert_eq!(
            Command::parse("add-menu name"),
            Err(CommandError::MalformedField("name".to_string()))
        );
    }

    #[test]
    fn test_edit_item_splits_id_and_fields() {
        let command = Command::parse("edit-item 9 price=4.50 | toggle=Vegan").unwrap();
        let Command::EditItem(id, fields) = command else {
            panic!("expected edit-item");
        };
        assert_eq!(id, 9);

        let mut draft = ItemDraft::new("Soup", "3");
        apply_item_fields(&mut draft, &fields).unwrap();
        assert_eq!(draft.price, "4.50");
        assert!(draft.tags.contains("Vegan"));
    }

    #[test]
    fn test_menu_fields_fill_draft() {
        let fields =
            Fields::parse("name=Brunch | cuisine=French | times=breakfast, lunch | age=kids")
                .unwrap();
        let mut draft = MenuDraft::default();
        apply_menu_fields(&mut draft, &fields).unwrap();

        assert_eq!(draft.name, "Brunch");
        assert_eq!(draft.cuisine, "French");
        assert_eq!(draft.age_group, AgeGroup::Kids);
        assert_eq!(
            draft.available_times.into_iter().collect::<Vec<_>>(),
            vec![MealTime::Breakfast, MealTime::Lunch]
        );
    }

    #[test]
    fn test_field_errors() {
        let mut draft = MenuDraft::default();
        let fields = Fields::parse("times=brunch").unwrap();
        assert_eq!(
            apply_menu_fields(&mut draft, &fields),
            Err(CommandError::InvalidValue {
                field: "times".to_string(),
                value: "brunch".to_string()
            })
        );

        let mut item = ItemDraft::default();
        let fields = Fields::parse("colour=red").unwrap();
        assert_eq!(
            apply_item_fields(&mut item, &fields),
            Err(CommandError::UnknownField("colour".to_string()))
        );
    }

    #[test]
    fn test_item_numbers_can_be_cleared() {
        let mut draft = ItemDraft::new("Curry", "10");
        apply_item_fields(&mut draft, &Fields::parse("spice=4 | calories=600").unwrap()).unwrap();
        assert_eq!(draft.spice_level, Some(4));
        assert_eq!(draft.calories, Some(600));

        apply_item_fields(&mut draft, &Fields::parse("spice=none").unwrap()).unwrap();
        assert_eq!(draft.spice_level, None);
    }

    #[test]
    fn test_category_position_field() {
        let mut draft = CategoryDraft::default();
        let fields = Fields::parse("name=Sides | position=4").unwrap();
        apply_category_fields(&mut draft, &fields).unwrap();
        assert_eq!(draft.name, "Sides");
        assert_eq!(draft.position, Some(4));
    }
}
