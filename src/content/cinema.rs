//! Cine-club programme: screenings and masterclasses.

use super::{format, l, Localized};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Screening {
    pub id: u32,
    pub title: Localized,
    pub director: Localized,
    pub year: u16,
    pub country: Localized,
    pub genre: Localized,
    /// Running time in minutes
    pub duration: u16,
    /// ISO date
    pub date: &'static str,
    /// 24h time
    pub time: &'static str,
    pub discussion_with: Localized,
    pub synopsis: Localized,
    pub is_opening: bool,
    pub is_past: bool,
}

impl Screening {
    pub fn date(&self) -> Option<NaiveDate> {
        format::parse_iso_date(self.date)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Masterclass {
    pub id: u32,
    pub title: Localized,
    pub guest: Localized,
    pub role: Localized,
    pub date: &'static str,
    pub topic: Localized,
}

/// Screening list filter from the cinema page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreeningFilter {
    #[default]
    All,
    Upcoming,
}

impl ScreeningFilter {
    /// Parse the `filter` query value; anything unknown shows everything.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("upcoming") => ScreeningFilter::Upcoming,
            _ => ScreeningFilter::All,
        }
    }
}

/// Screenings matching `filter`, in programme order.
pub fn screenings(filter: ScreeningFilter) -> Vec<&'static Screening> {
    SCREENINGS
        .iter()
        .filter(|s| match filter {
            ScreeningFilter::All => true,
            ScreeningFilter::Upcoming => !s.is_past,
        })
        .collect()
}

/// The opening screening, if the programme has one.
pub fn opening_screening() -> Option<&'static Screening> {
    SCREENINGS.iter().find(|s| s.is_opening)
}

pub const SCREENINGS: &[Screening] = &[
    Screening {
        id: 1,
        title: l("فيلم بامو", "Film Bamo"),
        director: l("محمد مفتكر", "Mohamed Mouftakir"),
        year: 2023,
        country: l("المغرب", "Maroc"),
        genre: l("دراما", "Drame"),
        duration: 95,
        date: "2024-02-15",
        time: "19:00",
        discussion_with: l("حمادي كيروم", "Hamadi Kirom"),
        synopsis: l(
            "قصة مؤثرة عن الهوية والانتماء في المغرب المعاصر",
            "Une histoire touchante sur l'identite et l'appartenance dans le Maroc contemporain",
        ),
        is_opening: true,
        is_past: false,
    },
    Screening {
        id: 2,
        title: l("أيام الساورة", "Les Jours de la Saoura"),
        director: l("عبد الله فركوس", "Abdallah Ferkous"),
        year: 2022,
        country: l("الجزائر", "Algerie"),
        genre: l("وثائقي", "Documentaire"),
        duration: 88,
        date: "2024-02-22",
        time: "19:00",
        discussion_with: l("ناقد سينمائي", "Critique de cinema"),
        synopsis: l(
            "رحلة بصرية في أعماق الصحراء الجزائرية",
            "Un voyage visuel dans les profondeurs du Sahara algerien",
        ),
        is_opening: false,
        is_past: false,
    },
    Screening {
        id: 3,
        title: l("البحر الأحمر يغوص", "La Mer Rouge Plonge"),
        director: l("فوزي بنسعيدي", "Faouzi Bensaidi"),
        year: 2023,
        country: l("المغرب", "Maroc"),
        genre: l("تجريبي", "Experimental"),
        duration: 102,
        date: "2024-03-01",
        time: "19:00",
        discussion_with: l("المخرج", "Le realisateur"),
        synopsis: l(
            "فيلم تجريبي يستكشف حدود السرد السينمائي",
            "Un film experimental qui explore les limites du recit cinematographique",
        ),
        is_opening: false,
        is_past: false,
    },
    Screening {
        id: 4,
        title: l("وشم العار", "Le Tatouage de la Honte"),
        director: l("أحمد البوعناني", "Ahmed Bouanani"),
        year: 1970,
        country: l("المغرب", "Maroc"),
        genre: l("تاريخي", "Historique"),
        duration: 90,
        date: "2024-03-08",
        time: "19:00",
        discussion_with: l("باحث في تاريخ السينما", "Chercheur en histoire du cinema"),
        synopsis: l(
            "كلاسيكية من السينما المغربية عن المقاومة",
            "Un classique du cinema marocain sur la resistance",
        ),
        is_opening: false,
        is_past: false,
    },
];

pub const MASTERCLASSES: &[Masterclass] = &[
    Masterclass {
        id: 1,
        title: l("لقاء مع حمادي كيروم", "Rencontre avec Hamadi Kirom"),
        guest: l("حمادي كيروم", "Hamadi Kirom"),
        role: l("ناقد سينمائي", "Critique de cinema"),
        date: "2024-02-15",
        topic: l(
            "قراءة نقدية للسينما المغربية المعاصرة",
            "Lecture critique du cinema marocain contemporain",
        ),
    },
    Masterclass {
        id: 2,
        title: l("ورشة كتابة السيناريو", "Atelier d'ecriture de scenario"),
        guest: l("سعيد الشرايبي", "Said Chraibi"),
        role: l("سيناريست ومخرج", "Scenariste et realisateur"),
        date: "2024-02-29",
        topic: l(
            "أساسيات كتابة السيناريو السينمائي",
            "Les bases de l'ecriture de scenario cinematographique",
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn test_all_filter_keeps_everything() {
        assert_eq!(screenings(ScreeningFilter::All).len(), SCREENINGS.len());
    }

    #[test]
    fn test_upcoming_filter_drops_past() {
        assert!(screenings(ScreeningFilter::Upcoming)
            .iter()
            .all(|s| !s.is_past));
    }

    #[test]
    fn test_filter_from_query() {
        assert_eq!(
            ScreeningFilter::from_query(Some("upcoming")),
            ScreeningFilter::Upcoming
        );
        assert_eq!(ScreeningFilter::from_query(Some("past")), ScreeningFilter::All);
        assert_eq!(ScreeningFilter::from_query(None), ScreeningFilter::All);
    }

    #[test]
    fn test_opening_screening_is_bamo() {
        let opening = opening_screening().unwrap();
        assert_eq!(opening.title.resolve(Locale::French), "Film Bamo");
    }

    #[test]
    fn test_screening_dates_parse() {
        for s in SCREENINGS {
            assert!(s.date().is_some(), "bad date on screening {}", s.id);
        }
        for m in MASTERCLASSES {
            assert!(format::parse_iso_date(m.date).is_some());
        }
    }
}
