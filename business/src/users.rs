//! The demo user directory shown on the users page.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::grid::{Card, Cell, Column, GridError, Responsive, Row, Tone, to_row};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub is_admin: bool,
    pub is_verified: bool,
    #[serde(rename = "rating_avg")]
    pub rating: f64,
    #[serde(rename = "geo_location")]
    pub location: String,
    pub created_at: String,
    pub image: String,
}

#[allow(clippy::too_many_arguments)]
fn user(
    username: &str,
    first_name: &str,
    last_name: &str,
    phone_suffix: u8,
    is_admin: bool,
    is_verified: bool,
    rating: f64,
    location: &str,
    created_at: &str,
) -> UserRecord {
    UserRecord {
        username: username.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone_number: format!("555-01{phone_suffix:02}"),
        is_admin,
        is_verified,
        rating,
        location: location.to_owned(),
        created_at: created_at.to_owned(),
        image: format!("https://i.pravatar.cc/150?img={phone_suffix}"),
    }
}

/// The ten users of the demo directory.
pub fn demo_users() -> Vec<UserRecord> {
    vec![
        user("johndoe", "John", "Doe", 1, false, true, 4.5, "New York, NY", "2024-01-15"),
        user("janesmith", "Jane", "Smith", 2, true, true, 4.8, "Los Angeles, CA", "2024-02-20"),
        user("bobjohnson", "Bob", "Johnson", 3, false, false, 3.9, "Chicago, IL", "2024-03-10"),
        user("alicebrown", "Alice", "Brown", 4, false, true, 4.7, "Houston, TX", "2024-04-05"),
        user("charliew", "Charlie", "Wilson", 5, false, true, 4.3, "Phoenix, AZ", "2024-05-12"),
        user(
            "davidmiller",
            "David",
            "Miller",
            6,
            false,
            true,
            4.6,
            "Philadelphia, PA",
            "2024-06-08",
        ),
        user("emilyjones", "Emily", "Jones", 7, false, true, 4.4, "San Antonio, TX", "2024-07-14"),
        user("frankgarcia", "Frank", "Garcia", 8, false, false, 3.8, "San Diego, CA", "2024-08-21"),
        user("gracetaylor", "Grace", "Taylor", 9, false, true, 4.9, "Dallas, TX", "2024-09-03"),
        user("henrylee", "Henry", "Lee", 10, false, true, 4.2, "Austin, TX", "2024-10-11"),
    ]
}

/// The demo users as grid rows, keyed by their listing field names.
pub fn user_rows() -> Result<Vec<Row>, GridError> {
    demo_users().iter().map(to_row).collect()
}

fn flag(value: Option<&Value>) -> bool {
    value.and_then(Value::as_bool).unwrap_or(false)
}

fn text<'a>(row: &'a Row, key: &str) -> &'a str {
    row.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn rating(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(number)) => format!("{number}/5"),
        _ => "-/5".to_owned(),
    }
}

/// Schema of the users listing.
pub fn user_columns() -> Vec<Column> {
    vec![
        Column::new("sl", "S.L").render(|_, _, index| Cell::text(index + 1)),
        Column::new("image", "Image").render(|value, _, _| {
            Cell::avatar(value.and_then(Value::as_str).unwrap_or_default(), "User")
        }),
        Column::new("username", "Username").sortable(),
        Column::new("firstName", "First Name").sortable(),
        Column::new("lastName", "Last Name").sortable(),
        Column::new("email", "Email").sortable(),
        Column::new("phoneNumber", "Phone"),
        Column::new("geo_location", "Location").responsive(Responsive::Desktop),
        Column::new("rating_avg", "Rating")
            .sortable()
            .responsive(Responsive::Desktop)
            .render(|value, _, _| Cell::Text(rating(value))),
        Column::new("isAdmin", "Admin").render(|value, _, _| {
            if flag(value) {
                Cell::badge("Yes", Tone::Primary)
            } else {
                Cell::badge("No", Tone::Default)
            }
        }),
        Column::new("isVerified", "Verified").render(|value, _, _| {
            if flag(value) {
                Cell::badge("Yes", Tone::Success)
            } else {
                Cell::badge("No", Tone::Error)
            }
        }),
        Column::new("createdAt", "Created").sortable(),
    ]
}

/// Card shown for a user on mobile.
pub fn user_card(row: &Row, index: usize) -> Card {
    let name = format!("{} {}", text(row, "firstName"), text(row, "lastName"));
    let mut card = Card::new(format!("#{} - {name}", index + 1))
        .subtitle(format!("@{}", text(row, "username")))
        .avatar(text(row, "image"), name)
        .field("Email", text(row, "email"))
        .field("Phone", text(row, "phoneNumber"))
        .field("Location", text(row, "geo_location"))
        .field("Rating", rating(row.get("rating_avg")));

    if flag(row.get("isAdmin")) {
        card = card.badge("Admin", Tone::Primary);
    }
    if flag(row.get("isVerified")) {
        card = card.badge("Verified", Tone::Success);
    }
    card
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        user_rows().expect("demo users convert to rows")
    }

    #[test]
    fn test_demo_users_match_directory() {
        let users = demo_users();
        assert_eq!(users.len(), 10);
        assert_eq!(users[0].email, "john@example.com");
        assert_eq!(users[9].phone_number, "555-0110");
        assert_eq!(users[9].image, "https://i.pravatar.cc/150?img=10");
        assert_eq!(users.iter().filter(|user| user.is_admin).count(), 1);
    }

    #[test]
    fn test_rows_use_listing_field_names() {
        let rows = rows();
        let jane = &rows[1];
        assert_eq!(jane.get("firstName"), Some(&Value::from("Jane")));
        assert_eq!(jane.get("geo_location"), Some(&Value::from("Los Angeles, CA")));
        assert_eq!(jane.get("rating_avg"), Some(&Value::from(4.8)));
        assert_eq!(jane.get("isAdmin"), Some(&Value::from(true)));
    }

    #[test]
    fn test_columns_schema() {
        let columns = user_columns();
        let labels: Vec<&str> = columns.iter().map(Column::label).collect();
        assert_eq!(labels, vec![
            "S.L",
            "Image",
            "Username",
            "First Name",
            "Last Name",
            "Email",
            "Phone",
            "Location",
            "Rating",
            "Admin",
            "Verified",
            "Created"
        ]);
        let sortable: Vec<String> = columns
            .iter()
            .filter(|column| column.is_sortable())
            .map(|column| column.id().to_string())
            .collect();
        assert_eq!(sortable, vec![
            "username",
            "firstName",
            "lastName",
            "email",
            "rating_avg",
            "createdAt"
        ]);
    }

    #[test]
    fn test_column_renderers() {
        let rows = rows();
        let columns = user_columns();
        let jane = &rows[1];
        assert_eq!(columns[0].cell(jane, 3), Cell::Text("4".to_owned()));
        assert_eq!(
            columns[1].cell(jane, 0),
            Cell::avatar("https://i.pravatar.cc/150?img=2", "User")
        );
        assert_eq!(columns[8].cell(jane, 0), Cell::Text("4.8/5".to_owned()));
        assert_eq!(columns[9].cell(jane, 0), Cell::badge("Yes", Tone::Primary));
        assert_eq!(columns[10].cell(&rows[2], 0), Cell::badge("No", Tone::Error));
    }

    #[test]
    fn test_user_card() {
        let rows = rows();
        let card = user_card(&rows[1], 0);
        assert_eq!(card.title, "#1 - Jane Smith");
        assert_eq!(card.subtitle.as_deref(), Some("@janesmith"));
        assert_eq!(card.avatar_alt, "Jane Smith");
        assert_eq!(card.fields[3], ("Rating".to_owned(), "4.8/5".to_owned()));
        assert_eq!(card.badges, vec![
            ("Admin".to_owned(), Tone::Primary),
            ("Verified".to_owned(), Tone::Success)
        ]);

        let bob = user_card(&rows[2], 4);
        assert_eq!(bob.title, "#5 - Bob Johnson");
        assert!(bob.badges.is_empty());
    }
}
