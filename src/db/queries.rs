use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{Booking, BookingDraft, BookingStatus};

pub fn insert_booking(conn: &Connection, id: &str, draft: &BookingDraft) -> anyhow::Result<()> {
    let booking_date = draft.booking_date.format("%Y-%m-%d").to_string();

    conn.execute(
        "INSERT INTO bookings (id, name, phone, booking_date, complaint)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![id, draft.name, draft.phone, booking_date, draft.complaint],
    )?;
    Ok(())
}

pub fn list_bookings(conn: &Connection) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, phone, booking_date, complaint, status, created_at
         FROM bookings ORDER BY booking_date ASC, rowid ASC",
    )?;

    let rows = stmt.query_map([], |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

fn parse_booking_row(row: &rusqlite::Row) -> anyhow::Result<Booking> {
    let booking_date_str: String = row.get(3)?;
    let complaint: Option<String> = row.get(4)?;
    let status_str: String = row.get(5)?;
    let created_at_str: String = row.get(6)?;

    let booking_date = NaiveDate::parse_from_str(&booking_date_str, "%Y-%m-%d")?;
    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc));

    Ok(Booking {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        booking_date,
        complaint: complaint.filter(|c| !c.trim().is_empty()),
        status: BookingStatus::from(status_str),
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn draft(name: &str, date: &str) -> BookingDraft {
        BookingDraft {
            name: name.to_string(),
            phone: "0812".to_string(),
            booking_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            complaint: String::new(),
        }
    }

    #[test]
    fn test_list_orders_by_date_then_insertion() {
        let conn = db::init_db(":memory:").unwrap();
        insert_booking(&conn, "a", &draft("Later", "2024-03-02")).unwrap();
        insert_booking(&conn, "b", &draft("First", "2024-03-01")).unwrap();
        insert_booking(&conn, "c", &draft("Second", "2024-03-01")).unwrap();

        let names: Vec<String> = list_bookings(&conn)
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Later"]);
    }

    #[test]
    fn test_new_rows_get_default_status_and_timestamp() {
        let conn = db::init_db(":memory:").unwrap();
        insert_booking(&conn, "a", &draft("Ahmad", "2024-03-01")).unwrap();

        let booking = list_bookings(&conn).unwrap().remove(0);
        assert_eq!(booking.id, "a");
        assert_eq!(booking.status, BookingStatus::pending());
        assert_eq!(booking.complaint, None);
        assert!(booking.created_at.is_some());
    }
}
