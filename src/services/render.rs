use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::Booking;
use crate::services::page::{AlertKind, PageView};

static STYLE_CSS: &str = include_str!("../web/style.css");

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

// e.g. "Sabtu, 2 Maret"
pub fn format_date_id(date: NaiveDate) -> String {
    format!(
        "{}, {} {}",
        weekday_name(date.weekday()),
        date.day(),
        MONTHS[date.month0() as usize]
    )
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_alert(view: &PageView) -> String {
    match &view.alert {
        Some(alert) => {
            let class = match alert.kind {
                AlertKind::Success => "success",
                AlertKind::Notice => "notice",
                AlertKind::Error => "error",
            };
            format!(
                "<div class=\"alert {class}\" role=\"alert\">{}</div>",
                escape_html(&alert.message)
            )
        }
        None => String::new(),
    }
}

fn render_form(view: &PageView) -> String {
    let form = view.form;
    let (disabled, label) = if view.submitting {
        (" disabled", "Mengirim...")
    } else {
        ("", "Daftar Sekarang")
    };

    format!(
        r#"<section class="card form-section">
  <h2>Buat Janji Baru</h2>
  {alert}
  <form method="post" action="/bookings" onsubmit="var b=this.querySelector('button[type=submit]');b.disabled=true;b.textContent='Mengirim...';">
    <input type="hidden" name="submission_id" value="{submission_id}">
    <div class="form-group">
      <label for="name">Nama Lengkap</label>
      <input type="text" id="name" name="name" value="{name}" required placeholder="Masukkan nama Anda">
    </div>
    <div class="form-group">
      <label for="phone">Nomor WhatsApp</label>
      <input type="tel" id="phone" name="phone" value="{phone}" required placeholder="Contoh: 08123456789">
    </div>
    <div class="form-group">
      <label for="booking_date">Tanggal Terapi</label>
      <input type="date" id="booking_date" name="booking_date" value="{booking_date}" required>
    </div>
    <div class="form-group">
      <label for="complaint">Keluhan (Opsional)</label>
      <textarea id="complaint" name="complaint" placeholder="Jelaskan keluhan kesehatan Anda...">{complaint}</textarea>
    </div>
    <button type="submit" class="btn-primary"{disabled}>{label}</button>
  </form>
</section>"#,
        alert = render_alert(view),
        submission_id = view.submission_id,
        name = escape_html(&form.name),
        phone = escape_html(&form.phone),
        booking_date = escape_html(&form.booking_date),
        complaint = escape_html(&form.complaint),
    )
}

fn render_booking(out: &mut String, booking: &Booking) {
    out.push_str(&format!(
        r#"      <li class="booking-item" data-id="{id}">
        <div class="booking-date">{date}</div>
        <div class="booking-info">
          <strong>{name}</strong>
          <span class="status {status}">{status}</span>
        </div>
      </li>
"#,
        id = escape_html(&booking.id),
        date = format_date_id(booking.booking_date),
        name = escape_html(&booking.name),
        status = escape_html(booking.status.as_str()),
    ));
}

fn render_list(view: &PageView) -> String {
    let mut out = String::from("<section class=\"card list-section\">\n  <h2>Jadwal Terdaftar</h2>\n");

    if view.list_stale {
        out.push_str("  <p class=\"notice\">Daftar jadwal belum dapat diperbarui.</p>\n");
    }

    if view.bookings.is_empty() {
        out.push_str("  <p class=\"empty-state\">Belum ada jadwal terdaftar.</p>\n");
    } else {
        out.push_str("  <ul class=\"booking-list\">\n");
        for booking in view.bookings {
            render_booking(&mut out, booking);
        }
        out.push_str("  </ul>\n");
    }

    out.push_str("</section>");
    out
}

pub fn render_page(view: &PageView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Jadwal Bekam Sunnah</title>
<style>
{STYLE_CSS}</style>
</head>
<body>
<div class="container">
  <header class="header">
    <h1>Jadwal Bekam Sunnah</h1>
    <p>Sehat dengan terapi sesuai sunnah Nabi</p>
  </header>
  <main class="main-content">
{form}
{list}
  </main>
</div>
</body>
</html>
"#,
        form = render_form(view),
        list = render_list(view),
    )
}
