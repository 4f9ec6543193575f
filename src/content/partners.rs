//! Partner institutions and their testimonials.

use super::{l, Localized};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerTier {
    Strategic,
    Institutional,
}

#[derive(Debug, Clone, Serialize)]
pub struct Partner {
    pub id: u32,
    pub name: Localized,
    pub description: Localized,
    /// Path under the static asset root; some partners have no logo
    pub logo: Option<&'static str>,
    pub tier: PartnerTier,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub quote: Localized,
    pub author: Localized,
}

/// Partners of one tier, in listing order.
pub fn by_tier(tier: PartnerTier) -> Vec<&'static Partner> {
    PARTNERS.iter().filter(|p| p.tier == tier).collect()
}

pub const PARTNERS: &[Partner] = &[
    Partner {
        id: 1,
        name: l(
            "المديرية الإقليمية لوزارة الثقافة - قطاع الشباب",
            "Direction Provinciale du Ministere de la Culture - Secteur Jeunesse",
        ),
        description: l(
            "شريك استراتيجي في دعم الفعاليات الثقافية والمهرجانات",
            "Partenaire strategique dans le soutien des evenements culturels et festivals",
        ),
        logo: Some("/Logo/ministry-culture-logo.png"),
        tier: PartnerTier::Strategic,
    },
    Partner {
        id: 2,
        name: l(
            "المديرية الإقليمية لوزارة التربية الوطنية",
            "Direction Provinciale du Ministere de l'Education Nationale",
        ),
        description: l(
            "شراكة في إطار برنامج الأندية المدرسية والتربية على الصورة",
            "Partenariat dans le cadre du programme des clubs scolaires et d'education a l'image",
        ),
        logo: Some("/Logo/ministry-education-logo.png"),
        tier: PartnerTier::Strategic,
    },
    Partner {
        id: 3,
        name: l(
            "المركز السينمائي المغربي",
            "Centre Cinematographique Marocain (CCM)",
        ),
        description: l(
            "دعم تقني وفني للعروض السينمائية وبرامج التكوين",
            "Soutien technique et artistique pour les projections et programmes de formation",
        ),
        logo: Some("/Logo/ccm-logo.png"),
        tier: PartnerTier::Strategic,
    },
    Partner {
        id: 4,
        name: l("عمالة سيدي البرنوصي", "Prefecture de Sidi Bernoussi"),
        description: l(
            "دعم لوجستي ومؤسساتي للأنشطة المحلية",
            "Soutien logistique et institutionnel pour les activites locales",
        ),
        logo: None,
        tier: PartnerTier::Institutional,
    },
    Partner {
        id: 5,
        name: l("دار الشباب سيدي البرنوصي", "Maison des Jeunes Sidi Bernoussi"),
        description: l(
            "مقر الجمعية وشريك في تنظيم الفعاليات",
            "Siege de l'association et partenaire dans l'organisation des evenements",
        ),
        logo: Some("/Logo/dar-chabab-logo.jpg"),
        tier: PartnerTier::Institutional,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: l(
            "جمعية الكرامة شريك أساسي في نشر الثقافة السينمائية بالمنطقة. تجربتهم في إنشاء الأندية السينمائية نموذجية.",
            "L'association Al-Karama est un partenaire essentiel dans la diffusion de la culture cinematographique dans la region. Leur experience dans la creation de cine-clubs est exemplaire.",
        ),
        author: l("مسؤول بالمركز السينمائي المغربي", "Responsable au CCM"),
    },
    Testimonial {
        quote: l(
            "برنامج تكوين المكونين أضاف قيمة حقيقية لأطرنا التربوية في مجال التربية على الصورة.",
            "Le programme de formation des formateurs a apporte une vraie valeur ajoutee a nos cadres educatifs dans le domaine de l'education a l'image.",
        ),
        author: l("مفتش تربوي", "Inspecteur educatif"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_partition_all_partners() {
        let strategic = by_tier(PartnerTier::Strategic);
        let institutional = by_tier(PartnerTier::Institutional);
        assert_eq!(strategic.len(), 3);
        assert_eq!(institutional.len(), 2);
        assert_eq!(strategic.len() + institutional.len(), PARTNERS.len());
    }

    #[test]
    fn test_prefecture_has_no_logo() {
        let prefecture = PARTNERS.iter().find(|p| p.id == 4).unwrap();
        assert!(prefecture.logo.is_none());
    }
}
