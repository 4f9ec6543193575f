//! Theatre troupe: productions, festival awards, workshops.

use super::{l, Localized};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Production {
    pub id: u32,
    pub title: Localized,
    pub year: u16,
    pub genre: Localized,
    pub synopsis: Localized,
    /// Minutes
    pub duration: u16,
    pub cast: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Festival {
    pub name: Localized,
    pub year: u16,
    pub award: Localized,
}

#[derive(Debug, Clone, Serialize)]
pub struct TheatreWorkshop {
    pub title: Localized,
    pub description: Localized,
    pub duration: Localized,
}

pub const PRODUCTIONS: &[Production] = &[
    Production {
        id: 1,
        title: l("صمت الكلام", "Le Silence des Mots"),
        year: 2023,
        genre: l("دراما", "Drame"),
        synopsis: l(
            "مسرحية تتناول قضايا الصمت والتعبير في المجتمع المعاصر",
            "Une piece qui traite les questions du silence et de l'expression dans la societe contemporaine",
        ),
        duration: 90,
        cast: 8,
    },
    Production {
        id: 2,
        title: l("ذاكرة الأجداد", "Memoire des Ancetres"),
        year: 2022,
        genre: l("تراثي", "Patrimoine"),
        synopsis: l(
            "رحلة في ذاكرة المغرب عبر حكايات الأجداد",
            "Un voyage dans la memoire du Maroc a travers les recits des ancetres",
        ),
        duration: 75,
        cast: 6,
    },
    Production {
        id: 3,
        title: l("ضحكات مرة", "Rires Amers"),
        year: 2021,
        genre: l("كوميديا سوداء", "Comedie noire"),
        synopsis: l(
            "كوميديا ساخرة تعالج قضايا اجتماعية بأسلوب فكاهي",
            "Une comedie satirique traitant des questions sociales avec humour",
        ),
        duration: 80,
        cast: 5,
    },
];

pub const FESTIVALS: &[Festival] = &[
    Festival {
        name: l(
            "المهرجان الوطني للمسرح بمكناس",
            "Festival National du Theatre de Meknes",
        ),
        year: 2023,
        award: l("جائزة أفضل عرض متكامل", "Prix du meilleur spectacle integre"),
    },
    Festival {
        name: l("مهرجان الدار البيضاء للمسرح", "Festival de Theatre de Casablanca"),
        year: 2022,
        award: l("جائزة أفضل ممثل", "Prix du meilleur acteur"),
    },
    Festival {
        name: l("ملتقى المسرح المغاربي", "Rencontre du Theatre Maghrebin"),
        year: 2022,
        award: l("شهادة تقديرية", "Certificat d'appreciation"),
    },
];

pub const WORKSHOPS: &[TheatreWorkshop] = &[
    TheatreWorkshop {
        title: l("ورشة التمثيل", "Atelier d'interpretation"),
        description: l(
            "تعلم أساسيات التمثيل المسرحي والتعبير الجسدي",
            "Apprenez les bases du jeu theatral et de l'expression corporelle",
        ),
        duration: l("3 أشهر", "3 mois"),
    },
    TheatreWorkshop {
        title: l("ورشة الارتجال", "Atelier d'improvisation"),
        description: l(
            "تطوير مهارات الارتجال والإبداع اللحظي",
            "Developpez vos competences en improvisation et creativite spontanee",
        ),
        duration: l("6 أسابيع", "6 semaines"),
    },
    TheatreWorkshop {
        title: l("ورشة الإخراج المسرحي", "Atelier de mise en scene"),
        description: l(
            "أساسيات الإخراج المسرحي وإدارة الفريق الفني",
            "Les bases de la mise en scene et la gestion de l'equipe artistique",
        ),
        duration: l("4 أشهر", "4 mois"),
    },
];
