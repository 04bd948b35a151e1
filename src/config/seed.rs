//! Built-in seed data, used whenever the config file leaves a seed list out.

use chrono::NaiveDate;

use crate::portal::model::{
    CalendarEvent, Contact, EventKind, FamilyMember, GalleryItem, NewsItem,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

pub fn default_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: 1,
            title: "Семейный ужин".into(),
            content: "Замечательно провели время всей семьёй за воскресным ужином. \
                      Бабушка приготовила свой фирменный пирог!"
                .into(),
            date: date(2026, 1, 15),
            author: "Мария".into(),
        },
        NewsItem {
            id: 2,
            title: "День рождения Александра".into(),
            content: "Отпраздновали 50-летие главы семейства. Собрались все родственники, \
                      было много подарков и тёплых слов."
                .into(),
            date: date(2026, 1, 10),
            author: "Елена".into(),
        },
    ]
}

pub fn default_events() -> Vec<CalendarEvent> {
    let event = |id, title: &str, date, kind| CalendarEvent {
        id,
        title: title.into(),
        date,
        kind,
    };
    vec![
        event(1, "День рождения Александра", date(2026, 1, 10), EventKind::Birthday),
        event(2, "Годовщина свадьбы", date(2026, 2, 14), EventKind::Anniversary),
        event(3, "День рождения Марии", date(2026, 3, 22), EventKind::Birthday),
        event(4, "Семейный праздник", date(2026, 5, 9), EventKind::Other),
    ]
}

pub fn default_family() -> Vec<FamilyMember> {
    let member = |id, name: &str, generation, parents: &[u32]| FamilyMember {
        id,
        name: name.into(),
        generation,
        parents: parents.to_vec(),
    };
    vec![
        member(1, "Александр Петрович", 1, &[]),
        member(2, "Елена Ивановна", 1, &[]),
        member(3, "Мария Александровна", 2, &[1, 2]),
        member(4, "Дмитрий Александрович", 2, &[1, 2]),
        member(5, "София Дмитриевна", 3, &[4]),
    ]
}

pub fn default_contacts() -> Vec<Contact> {
    let contact = |name: &str, phone: &str, email: &str, city: &str| Contact {
        name: name.into(),
        phone: phone.into(),
        email: email.into(),
        city: city.into(),
    };
    vec![
        contact("Александр Петрович", "+7 (999) 123-45-67", "aleksandr@family.ru", "Москва"),
        contact("Елена Ивановна", "+7 (999) 234-56-78", "elena@family.ru", "Москва"),
        contact(
            "Мария Александровна",
            "+7 (999) 345-67-89",
            "maria@family.ru",
            "Санкт-Петербург",
        ),
        contact("Дмитрий Александрович", "+7 (999) 456-78-90", "dmitry@family.ru", "Москва"),
    ]
}

pub fn default_gallery() -> Vec<GalleryItem> {
    (1..=6)
        .map(|i| GalleryItem {
            caption: format!("Семейное фото {}", i),
            year: 2026,
        })
        .collect()
}
