//! School cine-clubs and training programmes.

use super::{l, Localized};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Program {
    pub id: &'static str,
    pub title: Localized,
    pub description: Localized,
    pub duration: Localized,
    pub target: Localized,
    pub modules: &'static [Localized],
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainingWorkshop {
    pub title: Localized,
    pub description: Localized,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: Localized,
}

pub const PROGRAMS: &[Program] = &[
    Program {
        id: "trainers",
        title: l("تكوين المكونين", "Formation des Formateurs"),
        description: l(
            "برنامج متخصص لتأهيل الأطر التربوية في مجال التربية على الفنون السمعية البصرية",
            "Programme specialise pour qualifier les cadres educatifs dans le domaine de l'education aux arts audiovisuels",
        ),
        duration: l("6 أشهر", "6 mois"),
        target: l("المعلمين والمربين", "Enseignants et educateurs"),
        modules: &[
            l("مدخل إلى السينما", "Introduction au cinema"),
            l("تحليل الفيلم", "Analyse filmique"),
            l("منهجيات التعليم", "Methodologies d'enseignement"),
            l("إنتاج المحتوى", "Production de contenu"),
        ],
    },
    Program {
        id: "professions",
        title: l("مهن السينما", "Metiers du Cinema"),
        description: l(
            "ورشات تكوينية في كتابة السيناريو، المونتاج، والإخراج للشباب",
            "Ateliers de formation en ecriture de scenario, montage et realisation pour les jeunes",
        ),
        duration: l("4 أشهر", "4 mois"),
        target: l("الشباب من 16 إلى 30 سنة", "Jeunes de 16 a 30 ans"),
        modules: &[
            l("كتابة السيناريو", "Ecriture de scenario"),
            l("التصوير السينمائي", "Prise de vue cinematographique"),
            l("المونتاج", "Montage"),
            l("الإخراج", "Realisation"),
        ],
    },
    Program {
        id: "clubs",
        title: l("الأندية المدرسية", "Clubs Scolaires"),
        description: l(
            "مرافقة المؤسسات التعليمية في إنشاء وتأطير الأندية السينمائية",
            "Accompagnement des etablissements scolaires dans la creation et l'encadrement de cine-clubs",
        ),
        duration: l("السنة الدراسية", "Annee scolaire"),
        target: l("المؤسسات التعليمية", "Etablissements scolaires"),
        modules: &[
            l("إنشاء النادي", "Creation du club"),
            l("برمجة العروض", "Programmation des projections"),
            l("تأطير النقاشات", "Animation des debats"),
            l("إنتاج الأفلام القصيرة", "Production de courts-metrages"),
        ],
    },
];

pub const WORKSHOPS: &[TrainingWorkshop] = &[
    TrainingWorkshop {
        title: l("كتابة السيناريو", "Ecriture de Scenario"),
        description: l("من الفكرة إلى النص المكتمل", "De l'idee au texte finalise"),
    },
    TrainingWorkshop {
        title: l("التصوير", "Prise de Vue"),
        description: l("تقنيات الكاميرا والإضاءة", "Techniques de camera et d'eclairage"),
    },
    TrainingWorkshop {
        title: l("المونتاج", "Montage"),
        description: l("برامج المونتاج الاحترافية", "Logiciels de montage professionnels"),
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "200+", label: l("متدرب", "Stagiaires") },
    Stat { value: "15", label: l("نادي مدرسي", "Clubs scolaires") },
    Stat { value: "50+", label: l("مكون", "Formateurs") },
    Stat { value: "30+", label: l("ورشة", "Ateliers") },
];
