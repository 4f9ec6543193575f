//! Localized site dictionaries.
//!
//! One `Dictionary` constant per locale. The shape is shared through the
//! struct definitions; `DictionaryValidator` additionally checks that no
//! entry was left empty.

use crate::i18n::Locale;
use serde::Serialize;

/// All localized user-facing strings for a locale
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub about: AboutStrings,
    pub theatre: TheatreStrings,
    pub cinema: CinemaStrings,
    pub club_address: ClubAddressStrings,
    pub training: TrainingStrings,
    pub media: MediaStrings,
    pub media_coverage: MediaCoverageStrings,
    pub about_preview: AboutPreviewStrings,
    pub partners: PartnersStrings,
    pub contact: ContactStrings,
    pub registration: RegistrationStrings,
    pub blog: BlogStrings,
    pub footer: FooterStrings,
    pub common: CommonStrings,
}

impl Dictionary {
    /// The dictionary for a locale. Total: every locale has one.
    pub fn for_locale(locale: Locale) -> &'static Dictionary {
        match locale {
            Locale::Arabic => &ARABIC_STRINGS,
            Locale::French => &FRENCH_STRINGS,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavStrings {
    pub home: &'static str,
    pub about: &'static str,
    pub theatre: &'static str,
    pub cinema: &'static str,
    pub school_clubs: &'static str,
    pub media: &'static str,
    pub partners: &'static str,
    pub contact: &'static str,
    pub join_club: &'static str,
    /// Label of the toggle, written in the *other* language
    pub switch_language: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta1: &'static str,
    pub cta2: &'static str,
    pub scroll_down: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarStrings {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarsStrings {
    pub formation: PillarStrings,
    pub memory: PillarStrings,
    pub critique: PillarStrings,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutStrings {
    pub title: &'static str,
    pub identity: &'static str,
    pub board: &'static str,
    pub vision: &'static str,
    pub documents: &'static str,
    pub founded_year: &'static str,
    pub founded_value: &'static str,
    pub location: &'static str,
    pub location_value: &'static str,
    pub mission: &'static str,
    pub mission_text: &'static str,
    pub timeline: &'static str,
    pub pillars: PillarsStrings,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TheatreStrings {
    pub title: &'static str,
    pub productions: &'static str,
    pub school: &'static str,
    pub festivals: &'static str,
    pub troupe: &'static str,
    pub troupe_desc: &'static str,
    pub workshops: &'static str,
    pub register: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CinemaStrings {
    pub title: &'static str,
    pub club_title: &'static str,
    pub club_subtitle: &'static str,
    pub club_desc: &'static str,
    pub program: &'static str,
    pub masterclass: &'static str,
    pub memorycinema: &'static str,
    pub upcoming_screenings: &'static str,
    pub past_screenings: &'static str,
    pub all_screenings: &'static str,
    pub register_attendance: &'static str,
    pub opening_event: &'static str,
    pub opening_film: &'static str,
    pub discussion_with: &'static str,
    pub director: &'static str,
    pub screening_date: &'static str,
    pub screening_time: &'static str,
    pub venue: &'static str,
    pub minutes: &'static str,
    pub youth_training: &'static str,
    pub youth_training_subtitle: &'static str,
    pub training_programs: &'static str,
    pub training_programs_desc: &'static str,
    pub practical_workshops: &'static str,
    pub practical_workshops_desc: &'static str,
    pub student_projects: &'static str,
    pub student_projects_desc: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubAddressStrings {
    pub line1: &'static str,
    pub line2: &'static str,
    pub line3: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingStrings {
    pub title: &'static str,
    pub trainers: &'static str,
    pub professions: &'static str,
    pub school_clubs: &'static str,
    pub age_range: &'static str,
    pub curriculum: &'static str,
    pub apply: &'static str,
    pub how_to_create: &'static str,
    pub requirements: &'static str,
    pub partner_schools: &'static str,
    pub teacher_resources: &'static str,
    pub register_school: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaStrings {
    pub title: &'static str,
    pub news: &'static str,
    pub gallery: &'static str,
    pub videos: &'static str,
    pub press_coverage: &'static str,
    pub view_all: &'static str,
    pub print_press: &'static str,
    pub print_press_desc: &'static str,
    pub online_press: &'static str,
    pub online_press_desc: &'static str,
    pub tv_channels: &'static str,
    pub tv_channels_desc: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaCoverageStrings {
    pub title: &'static str,
    pub news1_title: &'static str,
    pub news1_content: &'static str,
    pub news2_title: &'static str,
    pub news2_content: &'static str,
    pub read_more: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPreviewStrings {
    pub title: &'static str,
    pub content: &'static str,
    pub learn_more: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnersStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub strategic: &'static str,
    pub institutional: &'static str,
    pub testimonials: &'static str,
    pub ministry_of_culture: &'static str,
    pub ministry_of_education: &'static str,
    pub ccm: &'static str,
    pub local_authorities: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub info_title: &'static str,
    pub address: &'static str,
    pub address_value: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub hours: &'static str,
    pub hours_value: &'static str,
    pub follow_us: &'static str,
    pub send_message: &'static str,
    pub name: &'static str,
    pub your_email: &'static str,
    pub message: &'static str,
    pub send: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub full_name: &'static str,
    pub age: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub motivation: &'static str,
    pub submit: &'static str,
    pub success: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub read_more: &'static str,
    pub by: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterStrings {
    pub rights: &'static str,
    pub slogan: &'static str,
    pub quick_links: &'static str,
    pub contact_info: &'static str,
    pub newsletter: &'static str,
    pub subscribe_desc: &'static str,
    pub subscribe: &'static str,
    pub email_placeholder: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonStrings {
    pub learn_more: &'static str,
    pub view_details: &'static str,
    pub close: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub required: &'static str,
    pub optional: &'static str,
    pub download: &'static str,
    pub share: &'static str,
    pub all: &'static str,
}

// ==================== Arabic Strings ====================

/// Arabic strings (primary locale)
pub const ARABIC_STRINGS: Dictionary = Dictionary {
    nav: NavStrings {
        home: "الرئيسية",
        about: "عن الجمعية",
        theatre: "قطب المسرح",
        cinema: "قطب السينما",
        school_clubs: "النوادي السينمائية المدرسية",
        media: "المركز الإعلامي",
        partners: "شركاؤنا",
        contact: "اتصل بنا",
        join_club: "تسجيل في النادي",
        switch_language: "Français",
    },
    hero: HeroStrings {
        title: "جمعية الكرامة للمسرح والسينما",
        subtitle: "الكرامة.. جسر بين سحر الخشبة وعمق الشاشة",
        cta1: "سجل في النادي السينمائي",
        cta2: "اكتشف برنامجنا",
        scroll_down: "اكتشف المزيد",
    },
    about: AboutStrings {
        title: "عن الجمعية",
        identity: "بطاقة الهوية",
        board: "المكتب المسير",
        vision: "رؤيتنا",
        documents: "الوثائق القانونية",
        founded_year: "سنة التأسيس",
        founded_value: "2017",
        location: "المقر",
        location_value: "دار الشباب سيدي البرنوصي، الدار البيضاء",
        mission: "مهمتنا",
        mission_text: "تأسست جمعية الكرامة للمسرح والسينما بسيدي البرنوصي بمدينة الدار البيضاء عام 2017، إيماناً منها بأن الفن جسر يربط بين الثقافات ويضيء دروب الوعي. نشأت الجمعية من حلم مشترك يجمع بين فنانين ومثقفين ومهتمين بالشأن الثقافي، يؤمنون بأن المسرح والسينما ليسا مجرد فرجة، بل أدوات لبناء الإنسان وتحرير العقول وتعزيز القيم الإنسانية النبيلة.",
        timeline: "مسيرتنا",
        pillars: PillarsStrings {
            formation: PillarStrings {
                title: "التكوين",
                description: "تدريب الشباب على فنون المسرح والسينما",
            },
            memory: PillarStrings {
                title: "الذاكرة",
                description: "الحفاظ على التراث السينمائي المغربي",
            },
            critique: PillarStrings {
                title: "النقد",
                description: "تطوير الحس النقدي والتحليلي",
            },
        },
    },
    theatre: TheatreStrings {
        title: "فرقة الكرامة",
        productions: "الإنتاجات المسرحية",
        school: "مدرسة المسرح",
        festivals: "مهرجانات ومشاركات",
        troupe: "فرقة الكرامة",
        troupe_desc: "فرقة مسرحية متخصصة في صناعة الفرجة",
        workshops: "ورشات التمثيل والارتجال",
        register: "سجل الآن",
    },
    cinema: CinemaStrings {
        title: "قطب السينما",
        club_title: "نادي البرنوصي السينمائي",
        club_subtitle: "افتتاح نادي البرنوصي السينمائي",
        club_desc: "فضاء للحوار والنقاش حول الفن السابع",
        program: "برنامج الأفلام المقترحة",
        masterclass: "ماستر كلاس (تكوين المكونين)",
        memorycinema: "سينما الذاكرة",
        upcoming_screenings: "العروض القادمة",
        past_screenings: "العروض السابقة",
        all_screenings: "جميع العروض",
        register_attendance: "سجل حضورك",
        opening_event: "حفل الافتتاح",
        opening_film: "فيلم بامو",
        discussion_with: "نقاش مع",
        director: "المخرج",
        screening_date: "تاريخ العرض",
        screening_time: "الوقت",
        venue: "المكان",
        minutes: "دقيقة",
        youth_training: "تكوين الشباب",
        youth_training_subtitle: "داخل المؤسسات التعليمية",
        training_programs: "برامج تكوينية",
        training_programs_desc: "تدريب الشباب على فنون السينما داخل المدارس",
        practical_workshops: "ورشات عملية",
        practical_workshops_desc: "ورشات في السيناريو والتصوير والمونتاج",
        student_projects: "مشاريع الطلاب",
        student_projects_desc: "عرض أعمال الطلاب في المهرجانات",
    },
    club_address: ClubAddressStrings {
        line1: "دار الشباب سيدي البرنوصي",
        line2: "شارع أبي ذر الغفاري",
        line3: "سيدي البرنوصي - البيضاء",
    },
    training: TrainingStrings {
        title: "النوادي السينمائية المدرسية",
        trainers: "تكوين المكونين",
        professions: "مهن السينما",
        school_clubs: "الأندية المدرسية",
        age_range: "للشباب من 16 إلى 30 سنة",
        curriculum: "المنهج الدراسي",
        apply: "قدم طلبك",
        how_to_create: "كيفية إنشاء نادي سينمائي",
        requirements: "المتطلبات والموارد",
        partner_schools: "المدارس الشريكة",
        teacher_resources: "موارد للمعلمين",
        register_school: "سجل مدرستك",
    },
    media: MediaStrings {
        title: "المركز الإعلامي",
        news: "أخبار",
        gallery: "معرض الصور",
        videos: "فيديو",
        press_coverage: "التغطية الإعلامية",
        view_all: "عرض الكل",
        print_press: "الجرائد الورقية",
        print_press_desc: "التغطيات الصحفية المطبوعة",
        online_press: "الجرائد الإلكترونية",
        online_press_desc: "المقالات والأخبار الرقمية",
        tv_channels: "القنوات التلفزيونية",
        tv_channels_desc: "التقارير والمقابلات التلفزيونية",
    },
    media_coverage: MediaCoverageStrings {
        title: "التغطية الإعلامية",
        news1_title: "افتتاح نادي البرنوصي السينمائي",
        news1_content: "احتضنت مقاطعات سيدي البرنوصي بقاعة العروض حفل افتتاح نادي البرنوصي السينمائي بحضور نخبة من الفنانين والمثقفين...",
        news2_title: "إطلاق برنامج تكويني شامل",
        news2_content: "أعلنت جمعية الكرامة للمسرح والسينما عن إطلاق برنامج تكويني شامل يستهدف الأطر التربوية والشباب الراغبين في دخول عالم السينما...",
        read_more: "اقرأ المزيد",
    },
    about_preview: AboutPreviewStrings {
        title: "من نحن",
        content: "جمعية الكرامة للمسرح والسينما، تأسست عام 2017 بسيدي البرنوصي، تهدف إلى نشر الثقافة السينمائية والمسرحية وتكوين الشباب في الفنون السمعية البصرية.",
        learn_more: "اعرف المزيد",
    },
    partners: PartnersStrings {
        title: "شركاؤنا",
        subtitle: "نفتخر بشراكاتنا مع المؤسسات الرائدة",
        strategic: "شركاء استراتيجيون",
        institutional: "شركاء مؤسساتيون",
        testimonials: "شهادات",
        ministry_of_culture: "المديرية الإقليمية لوزارة الثقافة - قطاع الشباب",
        ministry_of_education: "المديرية الإقليمية لوزارة التربية الوطنية",
        ccm: "المركز السينمائي المغربي",
        local_authorities: "السلطات المحلية",
    },
    contact: ContactStrings {
        title: "اتصل بنا",
        subtitle: "نحن سعداء بالتواصل معكم",
        info_title: "معلومات الاتصال",
        address: "العنوان",
        address_value: "دار الشباب سيدي البرنوصي، الدار البيضاء، المغرب",
        phone: "الهاتف",
        email: "البريد الإلكتروني",
        hours: "ساعات العمل",
        hours_value: "الإثنين - السبت: 09:00 - 18:00",
        follow_us: "تابعونا",
        send_message: "أرسل رسالة",
        name: "الاسم الكامل",
        your_email: "بريدك الإلكتروني",
        message: "رسالتك",
        send: "إرسال",
    },
    registration: RegistrationStrings {
        title: "انضم إلى النادي السينمائي",
        subtitle: "كن جزءاً من عائلة الكرامة",
        full_name: "الاسم الكامل",
        age: "العمر",
        phone: "رقم الهاتف",
        email: "البريد الإلكتروني",
        motivation: "ما الذي يدفعك للانضمام؟",
        submit: "تقديم الطلب",
        success: "تم إرسال طلبك بنجاح!",
    },
    blog: BlogStrings {
        title: "أقلام الكرامة",
        subtitle: "مقالات نقدية حول السينما والمسرح",
        read_more: "اقرأ المزيد",
        by: "بقلم",
    },
    footer: FooterStrings {
        rights: "جميع الحقوق محفوظة",
        slogan: "الكرامة.. جسر بين سحر الخشبة وعمق الشاشة",
        quick_links: "روابط سريعة",
        contact_info: "معلومات الاتصال",
        newsletter: "النشرة البريدية",
        subscribe_desc: "اشترك ليصلك كل جديد",
        subscribe: "اشتراك",
        email_placeholder: "بريدك الإلكتروني",
    },
    common: CommonStrings {
        learn_more: "اعرف المزيد",
        view_details: "عرض التفاصيل",
        close: "إغلاق",
        loading: "جاري التحميل...",
        error: "حدث خطأ",
        success: "تم بنجاح",
        required: "مطلوب",
        optional: "اختياري",
        download: "تحميل",
        share: "مشاركة",
        all: "الكل",
    },
};

// ==================== French Strings ====================

/// French strings
pub const FRENCH_STRINGS: Dictionary = Dictionary {
    nav: NavStrings {
        home: "Accueil",
        about: "A propos",
        theatre: "Pole Theatre",
        cinema: "Pole Cinema",
        school_clubs: "Clubs Cinema Scolaires",
        media: "Mediatheque",
        partners: "Partenaires",
        contact: "Contact",
        join_club: "S'inscrire au club",
        switch_language: "العربية",
    },
    hero: HeroStrings {
        title: "Association Al-Karama pour le Theatre et le Cinema",
        subtitle: "Al-Karama... Un pont entre la magie de la scene et la profondeur de l'ecran",
        cta1: "S'inscrire au Cine-Club",
        cta2: "Decouvrir notre Programme",
        scroll_down: "Decouvrir plus",
    },
    about: AboutStrings {
        title: "A propos",
        identity: "Carte d'identite",
        board: "Bureau Directeur",
        vision: "Notre Vision",
        documents: "Documents Legaux",
        founded_year: "Annee de fondation",
        founded_value: "2017",
        location: "Siege",
        location_value: "Maison des Jeunes Sidi Bernoussi, Casablanca",
        mission: "Notre Mission",
        mission_text: "L'Association Al-Karama pour le Theatre et le Cinema a ete fondee a Sidi Bernoussi, Casablanca en 2017, convaincue que l'art est un pont qui relie les cultures et illumine les chemins de la conscience. L'association est nee d'un reve partage entre artistes, intellectuels et passionnes de culture, qui croient que le theatre et le cinema ne sont pas de simples spectacles, mais des outils pour construire l'humain, liberer les esprits et promouvoir les valeurs humaines nobles.",
        timeline: "Notre Parcours",
        pillars: PillarsStrings {
            formation: PillarStrings {
                title: "Formation",
                description: "Former les jeunes aux arts du theatre et du cinema",
            },
            memory: PillarStrings {
                title: "Memoire",
                description: "Preserver le patrimoine cinematographique marocain",
            },
            critique: PillarStrings {
                title: "Critique",
                description: "Developper le sens critique et analytique",
            },
        },
    },
    theatre: TheatreStrings {
        title: "Troupe Al-Karama",
        productions: "Productions Theatrales",
        school: "Ecole de Theatre",
        festivals: "Festivals et Participations",
        troupe: "Troupe Al-Karama",
        troupe_desc: "Troupe theatrale specialisee dans la creation de spectacles",
        workshops: "Ateliers d'interpretation et d'improvisation",
        register: "Inscrivez-vous",
    },
    cinema: CinemaStrings {
        title: "Pole Cinema",
        club_title: "Cine-Club Bernoussi",
        club_subtitle: "Inauguration du Cine-Club Bernoussi",
        club_desc: "Un espace de dialogue et de discussion sur le 7eme art",
        program: "Programme des films proposes",
        masterclass: "Master Class (Formation des Formateurs)",
        memorycinema: "Cinema de la Memoire",
        upcoming_screenings: "Projections a venir",
        past_screenings: "Projections passees",
        all_screenings: "Toutes les projections",
        register_attendance: "Confirmer votre presence",
        opening_event: "Evenement d'inauguration",
        opening_film: "Film Bamo",
        discussion_with: "Discussion avec",
        director: "Realisateur",
        screening_date: "Date de projection",
        screening_time: "Heure",
        venue: "Lieu",
        minutes: "min",
        youth_training: "Formation des jeunes",
        youth_training_subtitle: "Dans les etablissements scolaires",
        training_programs: "Programmes de formation",
        training_programs_desc: "Former les jeunes aux arts cinematographiques dans les ecoles",
        practical_workshops: "Ateliers pratiques",
        practical_workshops_desc: "Ateliers de scenario, tournage et montage",
        student_projects: "Projets etudiants",
        student_projects_desc: "Presentation des travaux des etudiants dans les festivals",
    },
    club_address: ClubAddressStrings {
        line1: "Maison des Jeunes Sidi Bernoussi",
        line2: "Avenue Abou Dhar Al Ghifari",
        line3: "Sidi Bernoussi - Casablanca",
    },
    training: TrainingStrings {
        title: "Clubs Cinema Scolaires",
        trainers: "Formation des Formateurs",
        professions: "Metiers du Cinema",
        school_clubs: "Clubs Scolaires",
        age_range: "Pour les jeunes de 16 a 30 ans",
        curriculum: "Programme",
        apply: "Postuler",
        how_to_create: "Comment creer un cine-club",
        requirements: "Exigences et ressources",
        partner_schools: "Ecoles partenaires",
        teacher_resources: "Ressources pour enseignants",
        register_school: "Inscrire votre ecole",
    },
    media: MediaStrings {
        title: "Mediatheque",
        news: "Actualites",
        gallery: "Galerie Photos",
        videos: "Videos",
        press_coverage: "Couverture Mediatique",
        view_all: "Voir tout",
        print_press: "Presse ecrite",
        print_press_desc: "Couvertures de presse imprimee",
        online_press: "Presse en ligne",
        online_press_desc: "Articles et actualites numeriques",
        tv_channels: "Chaines TV",
        tv_channels_desc: "Reportages et interviews televisees",
    },
    media_coverage: MediaCoverageStrings {
        title: "Couverture Mediatique",
        news1_title: "Inauguration du Cine-Club Bernoussi",
        news1_content: "Les arrondissements de Sidi Bernoussi ont accueilli dans la salle des spectacles la ceremonie d'inauguration du Cine-Club Bernoussi en presence d'artistes et d'intellectuels...",
        news2_title: "Lancement d'un programme de formation complet",
        news2_content: "L'association Al-Karama pour le Theatre et le Cinema a annonce le lancement d'un programme de formation complet destine aux cadres educatifs et aux jeunes souhaitant entrer dans le monde du cinema...",
        read_more: "Lire la suite",
    },
    about_preview: AboutPreviewStrings {
        title: "Qui sommes-nous",
        content: "L'association Al-Karama pour le Theatre et le Cinema, fondee en 2017 a Sidi Bernoussi, vise a diffuser la culture cinematographique et theatrale et a former les jeunes aux arts audiovisuels.",
        learn_more: "En savoir plus",
    },
    partners: PartnersStrings {
        title: "Nos Partenaires",
        subtitle: "Fiers de nos partenariats avec des institutions de premier plan",
        strategic: "Partenaires strategiques",
        institutional: "Partenaires institutionnels",
        testimonials: "Temoignages",
        ministry_of_culture: "Direction Provinciale du Ministere de la Culture - Secteur Jeunesse",
        ministry_of_education: "Direction Provinciale du Ministere de l'Education Nationale",
        ccm: "Centre Cinematographique Marocain",
        local_authorities: "Autorites Locales",
    },
    contact: ContactStrings {
        title: "Contactez-nous",
        subtitle: "Nous sommes heureux de vous entendre",
        info_title: "Informations de Contact",
        address: "Adresse",
        address_value: "Maison des Jeunes Sidi Bernoussi, Casablanca, Maroc",
        phone: "Telephone",
        email: "Email",
        hours: "Horaires",
        hours_value: "Lundi - Samedi: 09h00 - 18h00",
        follow_us: "Suivez-nous",
        send_message: "Envoyer un message",
        name: "Nom complet",
        your_email: "Votre email",
        message: "Votre message",
        send: "Envoyer",
    },
    registration: RegistrationStrings {
        title: "Rejoindre le Cine-Club",
        subtitle: "Faites partie de la famille Al-Karama",
        full_name: "Nom complet",
        age: "Age",
        phone: "Telephone",
        email: "Email",
        motivation: "Qu'est-ce qui vous motive a nous rejoindre ?",
        submit: "Soumettre",
        success: "Votre demande a ete envoyee avec succes !",
    },
    blog: BlogStrings {
        title: "Plumes d'Al-Karama",
        subtitle: "Articles critiques sur le cinema et le theatre",
        read_more: "Lire la suite",
        by: "Par",
    },
    footer: FooterStrings {
        rights: "Tous droits reserves",
        slogan: "Al-Karama... Un pont entre la magie de la scene et la profondeur de l'ecran",
        quick_links: "Liens Rapides",
        contact_info: "Informations de Contact",
        newsletter: "Newsletter",
        subscribe_desc: "Abonnez-vous pour recevoir nos actualites",
        subscribe: "S'abonner",
        email_placeholder: "Votre email",
    },
    common: CommonStrings {
        learn_more: "En savoir plus",
        view_details: "Voir les details",
        close: "Fermer",
        loading: "Chargement...",
        error: "Une erreur s'est produite",
        success: "Succes",
        required: "Obligatoire",
        optional: "Optionnel",
        download: "Telecharger",
        share: "Partager",
        all: "Tout",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_locale_returns_matching_constant() {
        assert!(std::ptr::eq(
            Dictionary::for_locale(Locale::Arabic),
            &ARABIC_STRINGS
        ));
        assert!(std::ptr::eq(
            Dictionary::for_locale(Locale::French),
            &FRENCH_STRINGS
        ));
    }

    #[test]
    fn test_titles_differ_between_locales() {
        assert_ne!(ARABIC_STRINGS.hero.title, FRENCH_STRINGS.hero.title);
        assert_ne!(ARABIC_STRINGS.nav.home, FRENCH_STRINGS.nav.home);
    }

    #[test]
    fn test_switch_language_names_the_other_locale() {
        assert_eq!(
            ARABIC_STRINGS.nav.switch_language,
            Locale::French.native_name()
        );
        assert_eq!(
            FRENCH_STRINGS.nav.switch_language,
            Locale::Arabic.native_name()
        );
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let value = serde_json::to_value(&FRENCH_STRINGS).unwrap();
        assert_eq!(value["nav"]["schoolClubs"], "Clubs Cinema Scolaires");
        assert_eq!(value["about"]["pillars"]["memory"]["title"], "Memoire");
        assert!(value.get("club_address").is_none());
        assert!(value.get("clubAddress").is_some());
    }

    #[test]
    fn test_founded_year_matches_across_locales() {
        assert_eq!(
            ARABIC_STRINGS.about.founded_value,
            FRENCH_STRINGS.about.founded_value
        );
    }
}
