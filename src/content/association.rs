//! About page content: board, history, legal documents.

use super::{l, Localized};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BoardMember {
    pub name: Localized,
    pub role: Localized,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: Localized,
    pub description: Localized,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegalDocument {
    pub title: Localized,
    /// File type label, e.g. "PDF"
    pub kind: &'static str,
}

pub const BOARD_MEMBERS: &[BoardMember] = &[
    BoardMember {
        name: l("محمد العربي", "Mohamed Larbi"),
        role: l("الرئيس", "President"),
    },
    BoardMember {
        name: l("فاطمة الزهراء", "Fatima Zahra"),
        role: l("نائب الرئيس", "Vice-President"),
    },
    BoardMember {
        name: l("أحمد بنعلي", "Ahmed Benali"),
        role: l("المدير الفني", "Directeur Artistique"),
    },
    BoardMember {
        name: l("خديجة المنصوري", "Khadija Mansouri"),
        role: l("أمين المال", "Tresoriere"),
    },
    BoardMember {
        name: l("يوسف الإدريسي", "Youssef Idrissi"),
        role: l("مسؤول العلاقات العامة", "Responsable Relations Publiques"),
    },
    BoardMember {
        name: l("سعاد بركات", "Souad Barakat"),
        role: l("الكاتبة العامة", "Secretaire Generale"),
    },
];

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2017",
        title: l("تأسيس الجمعية", "Fondation de l'association"),
        description: l(
            "انطلاق جمعية الكرامة للمسرح والسينما بسيدي البرنوصي",
            "Lancement de l'association Al-Karama a Sidi Bernoussi",
        ),
    },
    TimelineEntry {
        year: "2018",
        title: l("أول إنتاج مسرحي", "Premiere production theatrale"),
        description: l(
            "عرض أول مسرحية من إنتاج فرقة الكرامة",
            "Premiere piece de theatre produite par la troupe Al-Karama",
        ),
    },
    TimelineEntry {
        year: "2020",
        title: l("إطلاق برنامج التكوين", "Lancement du programme de formation"),
        description: l(
            "بداية ورشات التكوين في فنون المسرح والسينما",
            "Debut des ateliers de formation aux arts du theatre et du cinema",
        ),
    },
    TimelineEntry {
        year: "2023",
        title: l("شراكة مع المركز السينمائي", "Partenariat avec le CCM"),
        description: l(
            "توقيع اتفاقية شراكة مع المركز السينمائي المغربي",
            "Signature d'un accord de partenariat avec le CCM",
        ),
    },
    TimelineEntry {
        year: "2024",
        title: l("افتتاح النادي السينمائي", "Inauguration du Cine-Club"),
        description: l(
            "افتتاح نادي البرنوصي السينمائي بعرض فيلم بامو",
            "Inauguration du Cine-Club Bernoussi avec le film Bamo",
        ),
    },
];

pub const DOCUMENTS: &[LegalDocument] = &[
    LegalDocument {
        title: l("النظام الأساسي المعدل", "Statuts Amendés"),
        kind: "PDF",
    },
    LegalDocument {
        title: l("التقرير المالي 2023", "Rapport Financier 2023"),
        kind: "PDF",
    },
    LegalDocument {
        title: l("التقرير الأدبي 2023", "Rapport Moral 2023"),
        kind: "PDF",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_is_chronological() {
        let years: Vec<_> = TIMELINE.iter().map(|t| t.year).collect();
        let mut sorted = years.clone();
        sorted.sort();
        assert_eq!(years, sorted);
    }

    #[test]
    fn test_board_has_six_members() {
        assert_eq!(BOARD_MEMBERS.len(), 6);
    }
}
