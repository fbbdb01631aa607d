/// All localized user-facing strings for a locale.
///
/// Strings are stored raw; the HTML shell escapes them at render time where
/// needed. Lookup goes through `strings_for`, which falls back to English
/// for any locale without its own set.
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_about: &'static str,
    pub nav_services: &'static str,
    pub nav_projects: &'static str,
    pub nav_careers: &'static str,
    pub nav_gallery: &'static str,
    pub nav_contact: &'static str,

    // ==================== Page Shell ====================
    /// Strapline under the site name on every page
    pub tagline: &'static str,

    /// Footer privacy policy link label
    pub privacy_policy: &'static str,

    /// Title shown on unknown routes
    pub not_found_title: &'static str,

    /// Body copy shown on unknown routes
    pub not_found_body: &'static str,

    // ==================== Contact Form ====================
    /// Response message when a submission was relayed successfully
    pub contact_sent: &'static str,

    /// Response message when a submission failed validation
    pub contact_invalid: &'static str,

    /// Response message when the upstream relay failed
    pub contact_failed: &'static str,
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    nav_home: "Home",
    nav_about: "About Us",
    nav_services: "Services",
    nav_projects: "Projects",
    nav_careers: "Careers",
    nav_gallery: "Gallery",
    nav_contact: "Contact",

    tagline: "Scaffolding and shoring solutions you can build on",
    privacy_policy: "Privacy Policy",
    not_found_title: "Page not found",
    not_found_body: "The page you are looking for does not exist or has moved.",

    contact_sent: "Thank you! Your message has been sent. We will get back to you shortly.",
    contact_invalid: "Please check the form: some required fields are missing or invalid.",
    contact_failed: "We could not send your message right now. Please try again later.",
};

// ==================== French Strings ====================

pub const FRENCH_STRINGS: LocaleStrings = LocaleStrings {
    nav_home: "Accueil",
    nav_about: "À propos",
    nav_services: "Services",
    nav_projects: "Projets",
    nav_careers: "Carrières",
    nav_gallery: "Galerie",
    nav_contact: "Contact",

    tagline: "Des solutions d'échafaudage et d'étaiement fiables",
    privacy_policy: "Politique de confidentialité",
    not_found_title: "Page introuvable",
    not_found_body: "La page que vous recherchez n'existe pas ou a été déplacée.",

    contact_sent: "Merci ! Votre message a bien été envoyé. Nous vous répondrons rapidement.",
    contact_invalid: "Veuillez vérifier le formulaire : certains champs requis sont manquants ou invalides.",
    contact_failed: "Impossible d'envoyer votre message pour le moment. Veuillez réessayer plus tard.",
};

// ==================== Arabic Strings ====================

pub const ARABIC_STRINGS: LocaleStrings = LocaleStrings {
    nav_home: "الرئيسية",
    nav_about: "من نحن",
    nav_services: "خدماتنا",
    nav_projects: "مشاريعنا",
    nav_careers: "وظائف",
    nav_gallery: "معرض الصور",
    nav_contact: "اتصل بنا",

    tagline: "حلول سقالات ودعائم يمكنك البناء عليها",
    privacy_policy: "سياسة الخصوصية",
    not_found_title: "الصفحة غير موجودة",
    not_found_body: "الصفحة التي تبحث عنها غير موجودة أو تم نقلها.",

    contact_sent: "شكراً لك! تم إرسال رسالتك وسنتواصل معك قريباً.",
    contact_invalid: "يرجى التحقق من النموذج: بعض الحقول المطلوبة ناقصة أو غير صالحة.",
    contact_failed: "تعذر إرسال رسالتك حالياً. يرجى المحاولة لاحقاً.",
};

// ==================== Italian Strings ====================

pub const ITALIAN_STRINGS: LocaleStrings = LocaleStrings {
    nav_home: "Home",
    nav_about: "Chi siamo",
    nav_services: "Servizi",
    nav_projects: "Progetti",
    nav_careers: "Carriere",
    nav_gallery: "Galleria",
    nav_contact: "Contatti",

    tagline: "Soluzioni di ponteggi e puntellazioni su cui costruire",
    privacy_policy: "Informativa sulla privacy",
    not_found_title: "Pagina non trovata",
    not_found_body: "La pagina che cerchi non esiste o è stata spostata.",

    contact_sent: "Grazie! Il tuo messaggio è stato inviato. Ti risponderemo al più presto.",
    contact_invalid: "Controlla il modulo: alcuni campi obbligatori mancano o non sono validi.",
    contact_failed: "Non è stato possibile inviare il messaggio. Riprova più tardi.",
};

/// Strings for a locale code, falling back to English for anything unknown.
pub fn strings_for(code: &str) -> &'static LocaleStrings {
    match code {
        "fr" => &FRENCH_STRINGS,
        "ar" => &ARABIC_STRINGS,
        "it" => &ITALIAN_STRINGS,
        _ => &ENGLISH_STRINGS,
    }
}
