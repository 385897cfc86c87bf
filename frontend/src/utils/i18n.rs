use std::fmt;
use lead_types::FieldErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
  #[default]
  En,
  Tr,
}

impl Locale {
  pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];

  pub fn code(&self) -> &'static str {
    match self {
      Locale::En => "en",
      Locale::Tr => "tr",
    }
  }

  /// Name of the language in that language, for the switcher.
  pub fn label(&self) -> &'static str {
    match self {
      Locale::En => "English",
      Locale::Tr => "Türkçe",
    }
  }

  pub fn from_code(code: &str) -> Option<Locale> {
    let code = code.trim().to_ascii_lowercase();
    Locale::ALL.into_iter().find(|l| l.code() == code)
  }

  /// Unknown path segments fall back to English.
  pub fn from_segment(segment: &str) -> Locale {
    Locale::from_code(segment).unwrap_or_default()
  }

  /// Picks a locale from a browser language tag such as `tr-TR` or `en-US`.
  pub fn negotiate(language: &str) -> Locale {
    language
      .split(|c: char| c == '-' || c == '_')
      .next()
      .and_then(Locale::from_code)
      .unwrap_or_default()
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

/// A pair of translations, resolved once per render with [`Localized::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
  pub en: &'static str,
  pub tr: &'static str,
}

impl Localized {
  pub const fn new(en: &'static str, tr: &'static str) -> Self {
    Self { en, tr }
  }

  pub fn get(&self, locale: Locale) -> &'static str {
    match locale {
      Locale::En => self.en,
      Locale::Tr => self.tr,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
  // chrome
  NavProduct,
  NavSolutions,
  NavPricing,
  NavCompany,
  NavContact,
  NavBookDemo,
  NavLanguage,
  NavOpenMenu,
  NavCloseMenu,
  AnnouncementDismiss,
  FooterTagline,
  FooterRights,
  FooterLegal,
  // home
  HeroEyebrow,
  HeroTitle,
  HeroSubtitle,
  HeroPrimaryCta,
  HeroSecondaryCta,
  TrustedBy,
  FeaturesTitle,
  StatsTitle,
  TestimonialsTitle,
  FaqTitle,
  MilestonesTitle,
  CtaTitle,
  CtaBody,
  CarouselPrevious,
  CarouselNext,
  CarouselGoTo,
  // pricing
  PricingTitle,
  PricingSubtitle,
  PricingMonthly,
  PricingYearly,
  PricingYearlySave,
  PricingPerMonth,
  PricingBilledYearly,
  PricingCustom,
  PricingChoose,
  PricingContactSales,
  PricingMostPopular,
  PricingCompareTitle,
  PricingFeatureColumn,
  // contact
  ContactTitle,
  ContactSubtitle,
  ContactAsideTitle,
  ContactAsideBody,
  ContactEmailLabel,
  ContactResponseLabel,
  ContactResponseValue,
  // demo
  DemoTitle,
  DemoSubtitle,
  DemoJourneyTitle,
  // legal / misc
  LegalUpdated,
  NotFoundTitle,
  NotFoundBody,
  NotFoundHome,
  // forms
  FormName,
  FormFirstName,
  FormLastName,
  FormEmail,
  FormCompany,
  FormPhone,
  FormEmployees,
  FormJobTitle,
  FormIndustry,
  FormIndustryOther,
  FormMessage,
  FormMessagePlaceholder,
  FormAgree,
  FormOptional,
  FormSelect,
  FormSubmit,
  FormSubmitting,
  FormSuccessTitle,
  FormSuccessBody,
  FormSendAnother,
  FormErrorGeneric,
  FormErrorTitle,
  FormDemoType,
  FormPreferredDate,
  FormPreferredTime,
  FormTimezone,
  FormInterests,
  FormNext,
  FormBack,
  FormRequestDemo,
  FormStepAbout,
  FormStepPreferences,
  FormStepInterests,
  FormStepOf,
  FormDraftRestored,
  DemoQuick,
  DemoStandard,
  DemoComprehensive,
  IndustryTechnology,
  IndustryFinance,
  IndustryRetail,
  IndustryManufacturing,
  IndustryHealthcare,
  IndustryEducation,
  IndustryOther,
  InterestAnalytics,
  InterestAutomation,
  InterestIntegrations,
  InterestSecurity,
  InterestReporting,
  InterestSupport,
  // validation
  ErrRequired,
  ErrInvalidEmail,
  ErrTooLong,
  ErrInvalidChoice,
  ErrInvalidDate,
  ErrInvalidTime,
  ErrMustAgree,
}

fn message(id: MessageId) -> Localized {
  use MessageId::*;
  let (en, tr) = match id {
    NavProduct => ("Product", "Ürün"),
    NavSolutions => ("Solutions", "Çözümler"),
    NavPricing => ("Pricing", "Fiyatlandırma"),
    NavCompany => ("Company", "Şirket"),
    NavContact => ("Contact", "İletişim"),
    NavBookDemo => ("Book a demo", "Demo planla"),
    NavLanguage => ("Language", "Dil"),
    NavOpenMenu => ("Open menu", "Menüyü aç"),
    NavCloseMenu => ("Close menu", "Menüyü kapat"),
    AnnouncementDismiss => ("Dismiss announcement", "Duyuruyu kapat"),
    FooterTagline => ("Operations software for teams that ship.", "Üreten ekipler için operasyon yazılımı."),
    FooterRights => ("All rights reserved.", "Tüm hakları saklıdır."),
    FooterLegal => ("Legal", "Yasal"),

    HeroEyebrow => ("New: workflow automation", "Yeni: iş akışı otomasyonu"),
    HeroTitle => ("Run your operations from one place", "Operasyonlarınızı tek yerden yönetin"),
    HeroSubtitle => (
      "Northwind connects your data, automates the busywork and gives every team the reports they need.",
      "Northwind verilerinizi birleştirir, rutin işleri otomatikleştirir ve her ekibe ihtiyaç duyduğu raporları sunar.",
    ),
    HeroPrimaryCta => ("Book a demo", "Demo planla"),
    HeroSecondaryCta => ("See pricing", "Fiyatları gör"),
    TrustedBy => ("Trusted by teams at", "Bu şirketlerin ekipleri bize güveniyor"),
    FeaturesTitle => ("Everything your team needs", "Ekibinizin ihtiyaç duyduğu her şey"),
    StatsTitle => ("Numbers that speak", "Rakamlarla biz"),
    TestimonialsTitle => ("What our customers say", "Müşterilerimiz ne diyor"),
    FaqTitle => ("Frequently asked questions", "Sıkça sorulan sorular"),
    MilestonesTitle => ("Our journey", "Yolculuğumuz"),
    CtaTitle => ("Ready to see it in action?", "Canlı görmeye hazır mısınız?"),
    CtaBody => (
      "Book a personalised demo and get answers from our product specialists.",
      "Kişiselleştirilmiş bir demo planlayın, sorularınızı ürün uzmanlarımız yanıtlasın.",
    ),
    CarouselPrevious => ("Previous", "Önceki"),
    CarouselNext => ("Next", "Sonraki"),
    CarouselGoTo => ("Go to slide", "Slayta git"),

    PricingTitle => ("Simple, transparent pricing", "Basit ve şeffaf fiyatlandırma"),
    PricingSubtitle => ("Start small and grow at your own pace.", "Küçük başlayın, kendi hızınızda büyüyün."),
    PricingMonthly => ("Monthly", "Aylık"),
    PricingYearly => ("Yearly", "Yıllık"),
    PricingYearlySave => ("Save {percent}%", "%{percent} tasarruf"),
    PricingPerMonth => ("/ month", "/ ay"),
    PricingBilledYearly => ("billed yearly", "yıllık faturalandırılır"),
    PricingCustom => ("Custom", "Özel"),
    PricingChoose => ("Get started", "Hemen başla"),
    PricingContactSales => ("Contact sales", "Satış ekibiyle görüş"),
    PricingMostPopular => ("Most popular", "En popüler"),
    PricingCompareTitle => ("Compare plans", "Planları karşılaştır"),
    PricingFeatureColumn => ("Feature", "Özellik"),

    ContactTitle => ("Get in touch", "Bize ulaşın"),
    ContactSubtitle => ("Tell us about your team and we will get back to you.", "Ekibinizi anlatın, size geri dönelim."),
    ContactAsideTitle => ("Let's talk about your needs", "İhtiyaçlarınızı konuşalım"),
    ContactAsideBody => (
      "Whether you are evaluating tools or ready to roll out, our team is here to help.",
      "İster araçları değerlendiriyor olun ister kuruluma hazır, ekibimiz yardıma hazır.",
    ),
    ContactEmailLabel => ("Email", "E-posta"),
    ContactResponseLabel => ("Response time", "Yanıt süresi"),
    ContactResponseValue => ("Within one business day", "Bir iş günü içinde"),

    DemoTitle => ("Book a demo", "Demo planlayın"),
    DemoSubtitle => ("See Northwind with your own use cases.", "Northwind'i kendi senaryolarınızla görün."),
    DemoJourneyTitle => ("What happens next", "Sonraki adımlar"),

    LegalUpdated => ("Last updated", "Son güncelleme"),
    NotFoundTitle => ("Page not found", "Sayfa bulunamadı"),
    NotFoundBody => (
      "We are terribly sorry, but the page you requested doesn't exist.",
      "Üzgünüz, aradığınız sayfa mevcut değil.",
    ),
    NotFoundHome => ("Back to home", "Ana sayfaya dön"),

    FormName => ("Full name", "Ad soyad"),
    FormFirstName => ("First name", "Ad"),
    FormLastName => ("Last name", "Soyad"),
    FormEmail => ("Work email", "İş e-postası"),
    FormCompany => ("Company", "Şirket"),
    FormPhone => ("Phone", "Telefon"),
    FormEmployees => ("Company size", "Şirket büyüklüğü"),
    FormJobTitle => ("Job title", "Ünvan"),
    FormIndustry => ("Industry", "Sektör"),
    FormIndustryOther => ("Your industry", "Sektörünüz"),
    FormMessage => ("Message", "Mesaj"),
    FormMessagePlaceholder => ("How can we help?", "Size nasıl yardımcı olabiliriz?"),
    FormAgree => (
      "I agree to the Terms of Service and Privacy Policy.",
      "Kullanım Koşulları'nı ve Gizlilik Politikası'nı kabul ediyorum.",
    ),
    FormOptional => ("optional", "isteğe bağlı"),
    FormSelect => ("Select…", "Seçiniz…"),
    FormSubmit => ("Send message", "Mesajı gönder"),
    FormSubmitting => ("Sending…", "Gönderiliyor…"),
    FormSuccessTitle => ("Thank you!", "Teşekkürler!"),
    FormSuccessBody => ("We'll be in touch within one business day.", "Bir iş günü içinde sizinle iletişime geçeceğiz."),
    FormSendAnother => ("Send another message", "Yeni bir mesaj gönder"),
    FormErrorGeneric => (
      "Something went wrong while sending the form. Please try again.",
      "Form gönderilirken bir sorun oluştu. Lütfen tekrar deneyin.",
    ),
    FormErrorTitle => ("Submission failed", "Gönderim başarısız"),
    FormDemoType => ("Demo length", "Demo süresi"),
    FormPreferredDate => ("Preferred date", "Tercih edilen tarih"),
    FormPreferredTime => ("Preferred time", "Tercih edilen saat"),
    FormTimezone => ("Time zone", "Saat dilimi"),
    FormInterests => ("What are you interested in?", "Hangi konularla ilgileniyorsunuz?"),
    FormNext => ("Continue", "Devam"),
    FormBack => ("Back", "Geri"),
    FormRequestDemo => ("Request demo", "Demo talep et"),
    FormStepAbout => ("About you", "Hakkınızda"),
    FormStepPreferences => ("Demo preferences", "Demo tercihleri"),
    FormStepInterests => ("Interests", "İlgi alanları"),
    FormStepOf => ("Step {current} of {total}", "Adım {current} / {total}"),
    FormDraftRestored => ("We restored what you typed last time.", "Son yazdıklarınızı geri yükledik."),
    DemoQuick => ("Quick overview (15 min)", "Kısa tanıtım (15 dk)"),
    DemoStandard => ("Standard demo (30 min)", "Standart demo (30 dk)"),
    DemoComprehensive => ("Deep dive (60 min)", "Detaylı inceleme (60 dk)"),
    IndustryTechnology => ("Technology", "Teknoloji"),
    IndustryFinance => ("Finance", "Finans"),
    IndustryRetail => ("Retail", "Perakende"),
    IndustryManufacturing => ("Manufacturing", "Üretim"),
    IndustryHealthcare => ("Healthcare", "Sağlık"),
    IndustryEducation => ("Education", "Eğitim"),
    IndustryOther => ("Other", "Diğer"),
    InterestAnalytics => ("Analytics", "Analitik"),
    InterestAutomation => ("Automation", "Otomasyon"),
    InterestIntegrations => ("Integrations", "Entegrasyonlar"),
    InterestSecurity => ("Security", "Güvenlik"),
    InterestReporting => ("Reporting", "Raporlama"),
    InterestSupport => ("Support", "Destek"),

    ErrRequired => ("This field is required.", "Bu alan zorunludur."),
    ErrInvalidEmail => ("Please enter a valid email address.", "Lütfen geçerli bir e-posta adresi girin."),
    ErrTooLong => ("Please keep this under {max} characters.", "Lütfen {max} karakteri geçmeyin."),
    ErrInvalidChoice => ("Please pick one of the options.", "Lütfen seçeneklerden birini seçin."),
    ErrInvalidDate => ("Please pick a valid date.", "Lütfen geçerli bir tarih seçin."),
    ErrInvalidTime => ("Please pick a valid time.", "Lütfen geçerli bir saat seçin."),
    ErrMustAgree => ("You need to accept the terms to continue.", "Devam etmek için koşulları kabul etmelisiniz."),
  };
  Localized::new(en, tr)
}

/// Resolves a UI string for the active locale.
pub fn t(locale: Locale, id: MessageId) -> &'static str {
  message(id).get(locale)
}

pub fn field_error_message(locale: Locale, kind: FieldErrorKind) -> String {
  let id = match kind {
    FieldErrorKind::Required => MessageId::ErrRequired,
    FieldErrorKind::InvalidEmail => MessageId::ErrInvalidEmail,
    FieldErrorKind::TooLong { .. } => MessageId::ErrTooLong,
    FieldErrorKind::InvalidChoice => MessageId::ErrInvalidChoice,
    FieldErrorKind::InvalidDate => MessageId::ErrInvalidDate,
    FieldErrorKind::InvalidTime => MessageId::ErrInvalidTime,
    FieldErrorKind::MustAgree => MessageId::ErrMustAgree,
  };
  let text = t(locale, id);
  match kind {
    FieldErrorKind::TooLong { max } => text.replace("{max}", &max.to_string()),
    _ => text.to_string(),
  }
}

pub fn step_of(locale: Locale, current: usize, total: usize) -> String {
  t(locale, MessageId::FormStepOf)
    .replace("{current}", &current.to_string())
    .replace("{total}", &total.to_string())
}
