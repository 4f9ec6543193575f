//! Media centre: news, photo gallery, videos.

use super::{l, Localized};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NewsArticle {
    pub id: u32,
    pub title: Localized,
    pub excerpt: Localized,
    /// ISO date
    pub date: &'static str,
    pub category: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Cinema,
    Theatre,
    Training,
}

impl GalleryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Cinema => "cinema",
            GalleryCategory::Theatre => "theatre",
            GalleryCategory::Training => "training",
        }
    }
}

/// Gallery filter: everything or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryFilter {
    #[default]
    All,
    Only(GalleryCategory),
}

impl GalleryFilter {
    /// Parse the `category` query value; unknown values show everything.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("cinema") => GalleryFilter::Only(GalleryCategory::Cinema),
            Some("theatre") => GalleryFilter::Only(GalleryCategory::Theatre),
            Some("training") => GalleryFilter::Only(GalleryCategory::Training),
            _ => GalleryFilter::All,
        }
    }

    pub fn matches(&self, category: GalleryCategory) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Only(c) => *c == category,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryImage {
    pub id: u32,
    pub category: GalleryCategory,
    pub event: Localized,
}

impl GalleryImage {
    /// Conventional asset path; existence is not checked.
    pub fn src(&self) -> String {
        format!("/images/gallery/{}.jpg", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Video {
    pub id: u32,
    pub title: Localized,
    /// mm:ss
    pub duration: &'static str,
    pub category: Localized,
}

pub fn gallery(filter: GalleryFilter) -> Vec<&'static GalleryImage> {
    GALLERY
        .iter()
        .filter(|img| filter.matches(img.category))
        .collect()
}

/// News, newest first.
pub fn latest_news(limit: usize) -> Vec<&'static NewsArticle> {
    let mut news: Vec<_> = NEWS.iter().collect();
    news.sort_by(|a, b| b.date.cmp(a.date));
    news.truncate(limit);
    news
}

pub const NEWS: &[NewsArticle] = &[
    NewsArticle {
        id: 1,
        title: l(
            "افتتاح نادي البرنوصي السينمائي بعرض فيلم \"بامو\"",
            "Inauguration du Cine-Club Bernoussi avec le film \"Bamo\"",
        ),
        excerpt: l(
            "احتضنت دار الشباب سيدي البرنوصي حفل افتتاح النادي السينمائي الجديد بحضور نخبة من الفنانين والمثقفين، حيث عرض فيلم \"بامو\" للمخرج محمد مفتكر تلاه نقاش ثري مع الناقد حمادي كيروم.",
            "La Maison des Jeunes de Sidi Bernoussi a accueilli la ceremonie d'inauguration du nouveau cine-club en presence d'artistes et d'intellectuels. Le film \"Bamo\" du realisateur Mohamed Mouftakir a ete projete, suivi d'un riche debat avec le critique Hamadi Kirom.",
        ),
        date: "2024-02-10",
        category: l("أخبار", "Actualites"),
    },
    NewsArticle {
        id: 2,
        title: l(
            "جمعية الكرامة تطلق برنامج تكوين مهن السينما",
            "Al-Karama lance un programme de formation aux metiers du cinema",
        ),
        excerpt: l(
            "أعلنت جمعية الكرامة للمسرح والسينما عن إطلاق برنامج تكويني شامل يستهدف الشباب الراغبين في دخول عالم السينما، ويشمل ورشات في كتابة السيناريو والمونتاج والإخراج.",
            "L'association Al-Karama pour le Theatre et le Cinema a annonce le lancement d'un programme de formation complet destine aux jeunes desireux d'entrer dans le monde du cinema, comprenant des ateliers de scenario, de montage et de realisation.",
        ),
        date: "2024-02-05",
        category: l("تكوين", "Formation"),
    },
    NewsArticle {
        id: 3,
        title: l(
            "لقاء مع الناقد السينمائي حمادي كيروم",
            "Rencontre avec le critique de cinema Hamadi Kirom",
        ),
        excerpt: l(
            "في إطار فعاليات الماستر كلاس، استضافت الجمعية الناقد السينمائي المغربي الشهير حمادي كيروم الذي قدم قراءة نقدية معمقة للسينما المغربية المعاصرة.",
            "Dans le cadre des activites Master Class, l'association a accueilli le celebre critique de cinema marocain Hamadi Kirom qui a presente une lecture critique approfondie du cinema marocain contemporain.",
        ),
        date: "2024-01-28",
        category: l("ماستر كلاس", "Masterclass"),
    },
    NewsArticle {
        id: 4,
        title: l(
            "شراكة جديدة مع المركز السينمائي المغربي",
            "Nouveau partenariat avec le Centre Cinematographique Marocain",
        ),
        excerpt: l(
            "وقعت جمعية الكرامة اتفاقية شراكة استراتيجية مع المركز السينمائي المغربي لدعم الأنشطة الثقافية والتكوينية.",
            "L'association Al-Karama a signe un accord de partenariat strategique avec le Centre Cinematographique Marocain pour soutenir les activites culturelles et formatrices.",
        ),
        date: "2024-01-15",
        category: l("شراكات", "Partenariats"),
    },
];

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage { id: 1, category: GalleryCategory::Cinema, event: l("افتتاح النادي السينمائي", "Inauguration Cine-Club") },
    GalleryImage { id: 2, category: GalleryCategory::Cinema, event: l("عرض فيلم بامو", "Projection Bamo") },
    GalleryImage { id: 3, category: GalleryCategory::Theatre, event: l("مسرحية صمت الكلام", "Piece Le Silence des Mots") },
    GalleryImage { id: 4, category: GalleryCategory::Training, event: l("ورشة كتابة السيناريو", "Atelier Scenario") },
    GalleryImage { id: 5, category: GalleryCategory::Cinema, event: l("ماستر كلاس", "Masterclass") },
    GalleryImage { id: 6, category: GalleryCategory::Theatre, event: l("بروفات مسرحية", "Repetitions") },
    GalleryImage { id: 7, category: GalleryCategory::Training, event: l("تكوين المكونين", "Formation Formateurs") },
    GalleryImage { id: 8, category: GalleryCategory::Cinema, event: l("نقاش سينمائي", "Debat Cinematographique") },
];

pub const VIDEOS: &[Video] = &[
    Video {
        id: 1,
        title: l("حفل افتتاح النادي السينمائي", "Ceremonie d'inauguration du Cine-Club"),
        duration: "15:30",
        category: l("فعاليات", "Evenements"),
    },
    Video {
        id: 2,
        title: l("لقاء مع حمادي كيروم", "Rencontre avec Hamadi Kirom"),
        duration: "45:00",
        category: l("ماستر كلاس", "Masterclass"),
    },
    Video {
        id: 3,
        title: l("كواليس مسرحية صمت الكلام", "Coulisses de Le Silence des Mots"),
        duration: "08:45",
        category: l("مسرح", "Theatre"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_filter_all() {
        assert_eq!(gallery(GalleryFilter::All).len(), GALLERY.len());
    }

    #[test]
    fn test_gallery_filter_by_category() {
        let theatre = gallery(GalleryFilter::from_query(Some("theatre")));
        assert_eq!(theatre.len(), 2);
        assert!(theatre
            .iter()
            .all(|img| img.category == GalleryCategory::Theatre));
    }

    #[test]
    fn test_gallery_filter_unknown_shows_all() {
        assert_eq!(GalleryFilter::from_query(Some("concerts")), GalleryFilter::All);
    }

    #[test]
    fn test_latest_news_sorted_and_limited() {
        let news = latest_news(2);
        assert_eq!(news.len(), 2);
        assert_eq!(news[0].date, "2024-02-10");
        assert_eq!(news[1].date, "2024-02-05");
    }

    #[test]
    fn test_gallery_src_convention() {
        assert_eq!(GALLERY[0].src(), "/images/gallery/1.jpg");
    }
}
