//! Static page copy. Every user-facing string is a [`Localized`] pair so pages
//! pick the text for the current locale at render time.

use crate::utils::{i18n::Localized, nav::DropdownId};

const fn l(en: &'static str, tr: &'static str) -> Localized {
  Localized::new(en, tr)
}

/// In-site destinations the chrome and content can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
  Home,
  Pricing,
  Contact,
  Demo,
  Legal(LegalDoc),
}

pub struct NavItem {
  pub label: Localized,
  pub description: Localized,
  pub page: Page,
}

pub fn dropdown_items(id: DropdownId) -> &'static [NavItem] {
  match id {
    DropdownId::Product => &PRODUCT_ITEMS,
    DropdownId::Solutions => &SOLUTION_ITEMS,
    DropdownId::Company => &COMPANY_ITEMS,
  }
}

static PRODUCT_ITEMS: [NavItem; 3] = [
  NavItem { label: l("Overview", "Genel bakış"), description: l("What Northwind does", "Northwind neler yapar"), page: Page::Home },
  NavItem { label: l("Plans", "Paketler"), description: l("Compare tiers and prices", "Paketleri ve fiyatları karşılaştırın"), page: Page::Pricing },
  NavItem { label: l("Live demo", "Canlı demo"), description: l("See it with your own data", "Kendi verilerinizle görün"), page: Page::Demo },
];

static SOLUTION_ITEMS: [NavItem; 2] = [
  NavItem { label: l("For operations", "Operasyon ekipleri için"), description: l("Automate handovers and approvals", "Devirleri ve onayları otomatikleştirin"), page: Page::Demo },
  NavItem { label: l("For finance", "Finans ekipleri için"), description: l("Close the month without spreadsheets", "Ay sonunu tablolar olmadan kapatın"), page: Page::Contact },
];

static COMPANY_ITEMS: [NavItem; 3] = [
  NavItem { label: l("Contact us", "Bize ulaşın"), description: l("Talk to sales or support", "Satış veya destek ile görüşün"), page: Page::Contact },
  NavItem { label: l("Privacy", "Gizlilik"), description: l("How we handle your data", "Verilerinizi nasıl işliyoruz"), page: Page::Legal(LegalDoc::Privacy) },
  NavItem { label: l("Terms", "Koşullar"), description: l("The agreement behind the service", "Hizmetin dayandığı sözleşme"), page: Page::Legal(LegalDoc::Terms) },
];

pub static ANNOUNCEMENTS: [Localized; 3] = [
  l("Workflow automation is now generally available.", "İş akışı otomasyonu artık herkesin kullanımında."),
  l("New: connectors for SAP and NetSuite.", "Yeni: SAP ve NetSuite bağlayıcıları."),
  l("Join our live product tour every Thursday.", "Her perşembe canlı ürün turumuza katılın."),
];

pub static COMPANIES: [&str; 6] = ["Contoso", "Fabrikam", "Tailspin", "Litware", "Adatum", "Wingtip"];

pub struct Feature {
  pub icon: &'static str,
  pub title: Localized,
  pub body: Localized,
}

pub static FEATURES: [Feature; 4] = [
  Feature {
    icon: "⚡",
    title: l("Automated workflows", "Otomatik iş akışları"),
    body: l(
      "Route requests, approvals and handovers without copy and paste.",
      "Talepleri, onayları ve devirleri kopyala yapıştır olmadan yönlendirin.",
    ),
  },
  Feature {
    icon: "📊",
    title: l("Live reporting", "Canlı raporlama"),
    body: l(
      "Dashboards that refresh as work happens, shared with one link.",
      "İş ilerledikçe yenilenen, tek bağlantıyla paylaşılan panolar.",
    ),
  },
  Feature {
    icon: "🔌",
    title: l("Integrations", "Entegrasyonlar"),
    body: l(
      "Connect your CRM, ERP and data warehouse in minutes.",
      "CRM, ERP ve veri ambarınızı dakikalar içinde bağlayın.",
    ),
  },
  Feature {
    icon: "🔒",
    title: l("Enterprise security", "Kurumsal güvenlik"),
    body: l(
      "SSO, audit logs and data residency in the EU or US.",
      "SSO, denetim kayıtları ve AB veya ABD'de veri barındırma.",
    ),
  },
];

pub struct Stat {
  pub value: &'static str,
  pub label: Localized,
}

pub static STATS: [Stat; 4] = [
  Stat { value: "1,200+", label: l("customers", "müşteri") },
  Stat { value: "38", label: l("countries", "ülke") },
  Stat { value: "99.95%", label: l("uptime", "çalışma süresi") },
  Stat { value: "4.8/5", label: l("average rating", "ortalama puan") },
];

pub struct Testimonial {
  pub quote: Localized,
  pub author: &'static str,
  pub role: Localized,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
  Testimonial {
    quote: l(
      "We replaced four tools and a shared inbox. Month-end now takes two days instead of eight.",
      "Dört aracı ve ortak bir gelen kutusunu bıraktık. Ay sonu kapanışı artık sekiz değil iki gün sürüyor.",
    ),
    author: "Mira Castell",
    role: l("CFO, Fabrikam", "Finans Direktörü, Fabrikam"),
  },
  Testimonial {
    quote: l(
      "The onboarding team had our first workflow live in a week.",
      "Kurulum ekibi ilk iş akışımızı bir haftada canlıya aldı.",
    ),
    author: "Deniz Aksoy",
    role: l("Head of Operations, Tailspin", "Operasyon Müdürü, Tailspin"),
  },
  Testimonial {
    quote: l(
      "Reporting used to be a weekly fire drill. Now it just exists.",
      "Raporlama eskiden her hafta bir yangın tatbikatıydı. Artık kendiliğinden hazır.",
    ),
    author: "Jonas Berg",
    role: l("COO, Litware", "Genel Müdür Yardımcısı, Litware"),
  },
];

#[derive(PartialEq)]
pub struct Faq {
  pub question: Localized,
  pub answer: Localized,
}

pub static HOME_FAQS: [Faq; 3] = [
  Faq {
    question: l("How long does setup take?", "Kurulum ne kadar sürer?"),
    answer: l(
      "Most teams run their first workflow within two weeks. Larger rollouts get a dedicated onboarding manager.",
      "Çoğu ekip ilk iş akışını iki hafta içinde çalıştırır. Büyük kurulumlara özel bir kurulum yöneticisi atanır.",
    ),
  },
  Faq {
    question: l("Where is my data stored?", "Verilerim nerede saklanıyor?"),
    answer: l(
      "You choose the EU or US region when your workspace is created.",
      "Çalışma alanınız oluşturulurken AB veya ABD bölgesini siz seçersiniz.",
    ),
  },
  Faq {
    question: l("Can I try it first?", "Önce deneyebilir miyim?"),
    answer: l(
      "Yes. Book a demo and we set up a 14-day trial with your own data.",
      "Evet. Bir demo planlayın, kendi verilerinizle 14 günlük bir deneme kuralım.",
    ),
  },
];

pub static PRICING_FAQS: [Faq; 3] = [
  Faq {
    question: l("Can I switch plans later?", "Paketimi sonradan değiştirebilir miyim?"),
    answer: l(
      "Upgrades apply immediately. Downgrades take effect at the next billing date.",
      "Yükseltmeler hemen uygulanır. Düşürmeler bir sonraki fatura tarihinde geçerli olur.",
    ),
  },
  Faq {
    question: l("Is there a discount for yearly billing?", "Yıllık ödemede indirim var mı?"),
    answer: l(
      "Yearly billing costs 20% less than paying month by month.",
      "Yıllık ödeme, aylık ödemeye göre %20 daha ucuzdur.",
    ),
  },
  Faq {
    question: l("Do you offer non-profit pricing?", "Kâr amacı gütmeyen kuruluşlara özel fiyat var mı?"),
    answer: l(
      "Yes, contact our sales team with your registration details.",
      "Evet, kayıt bilgilerinizle satış ekibimize ulaşın.",
    ),
  },
];

pub struct Milestone {
  pub year: &'static str,
  pub title: Localized,
}

pub static MILESTONES: [Milestone; 4] = [
  Milestone { year: "2016", title: l("Founded in Rotterdam", "Rotterdam'da kuruldu") },
  Milestone { year: "2018", title: l("First 100 customers", "İlk 100 müşteri") },
  Milestone { year: "2021", title: l("Istanbul office opens", "İstanbul ofisi açıldı") },
  Milestone { year: "2024", title: l("Workflow automation launch", "İş akışı otomasyonu yayında") },
];

pub struct JourneyStep {
  pub title: Localized,
  pub body: Localized,
}

pub static JOURNEY: [JourneyStep; 3] = [
  JourneyStep {
    title: l("Tell us about your team", "Ekibinizi tanıyalım"),
    body: l("A few details so the demo fits your work.", "Demonun işinize uyması için birkaç bilgi."),
  },
  JourneyStep {
    title: l("Meet a specialist", "Bir uzmanla görüşün"),
    body: l("A live walkthrough, with time for your questions.", "Sorularınıza da zaman ayrılan canlı bir tanıtım."),
  },
  JourneyStep {
    title: l("Start your trial", "Denemenizi başlatın"),
    body: l("We set up a workspace with your own data.", "Kendi verilerinizle bir çalışma alanı kuruyoruz."),
  },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Billing {
  Monthly,
  Yearly,
}

pub const YEARLY_DISCOUNT_PERCENT: u32 = 20;

/// Price per seat per month in whole euros, after the yearly discount when it applies.
pub fn monthly_price(list_price: u32, billing: Billing) -> u32 {
  match billing {
    Billing::Monthly => list_price,
    Billing::Yearly => (list_price * (100 - YEARLY_DISCOUNT_PERCENT) + 50) / 100,
  }
}

pub struct Tier {
  pub name: &'static str,
  pub tagline: Localized,
  /// `None` for custom-quoted plans.
  pub list_price: Option<u32>,
  pub features: &'static [Localized],
  pub highlighted: bool,
}

pub static TIERS: [Tier; 3] = [
  Tier {
    name: "Starter",
    tagline: l("For small teams getting organised", "Düzen kuran küçük ekipler için"),
    list_price: Some(19),
    features: &[
      l("Up to 10 users", "10 kullanıcıya kadar"),
      l("5 workflows", "5 iş akışı"),
      l("Email support", "E-posta desteği"),
    ],
    highlighted: false,
  },
  Tier {
    name: "Growth",
    tagline: l("For departments scaling their process", "Süreçlerini büyüten departmanlar için"),
    list_price: Some(49),
    features: &[
      l("Unlimited users", "Sınırsız kullanıcı"),
      l("Unlimited workflows", "Sınırsız iş akışı"),
      l("Live reporting", "Canlı raporlama"),
      l("Priority support", "Öncelikli destek"),
    ],
    highlighted: true,
  },
  Tier {
    name: "Enterprise",
    tagline: l("For organisations with custom needs", "Özel ihtiyaçları olan kurumlar için"),
    list_price: None,
    features: &[
      l("SSO and audit logs", "SSO ve denetim kayıtları"),
      l("Data residency", "Veri barındırma bölgesi"),
      l("Dedicated success manager", "Özel müşteri başarı yöneticisi"),
    ],
    highlighted: false,
  },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
  Yes,
  No,
  Text(Localized),
}

pub struct ComparisonRow {
  pub feature: Localized,
  /// One cell per entry of [`TIERS`], in order.
  pub cells: [Cell; 3],
}

pub static COMPARISON: [ComparisonRow; 5] = [
  ComparisonRow { feature: l("Users", "Kullanıcılar"), cells: [Cell::Text(l("10", "10")), Cell::Text(l("Unlimited", "Sınırsız")), Cell::Text(l("Unlimited", "Sınırsız"))] },
  ComparisonRow { feature: l("Workflows", "İş akışları"), cells: [Cell::Text(l("5", "5")), Cell::Text(l("Unlimited", "Sınırsız")), Cell::Text(l("Unlimited", "Sınırsız"))] },
  ComparisonRow { feature: l("Live reporting", "Canlı raporlama"), cells: [Cell::No, Cell::Yes, Cell::Yes] },
  ComparisonRow { feature: l("SSO", "SSO"), cells: [Cell::No, Cell::No, Cell::Yes] },
  ComparisonRow { feature: l("Support", "Destek"), cells: [Cell::Text(l("Email", "E-posta")), Cell::Text(l("Priority", "Öncelikli")), Cell::Text(l("Dedicated", "Özel"))] },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDoc {
  Privacy,
  Terms,
  Cookies,
}

pub struct LegalSection {
  pub heading: Localized,
  pub body: Localized,
}

impl LegalDoc {
  pub const ALL: [LegalDoc; 3] = [LegalDoc::Privacy, LegalDoc::Terms, LegalDoc::Cookies];

  pub fn slug(&self) -> &'static str {
    match self {
      LegalDoc::Privacy => "privacy",
      LegalDoc::Terms => "terms",
      LegalDoc::Cookies => "cookies",
    }
  }

  pub fn from_slug(slug: &str) -> Option<LegalDoc> {
    LegalDoc::ALL.into_iter().find(|d| d.slug() == slug)
  }

  pub fn title(&self) -> Localized {
    match self {
      LegalDoc::Privacy => l("Privacy policy", "Gizlilik politikası"),
      LegalDoc::Terms => l("Terms of service", "Hizmet koşulları"),
      LegalDoc::Cookies => l("Cookie policy", "Çerez politikası"),
    }
  }

  pub fn updated(&self) -> &'static str {
    "2025-01-15"
  }

  pub fn sections(&self) -> &'static [LegalSection] {
    match self {
      LegalDoc::Privacy => &PRIVACY,
      LegalDoc::Terms => &TERMS,
      LegalDoc::Cookies => &COOKIES,
    }
  }
}

static PRIVACY: [LegalSection; 3] = [
  LegalSection {
    heading: l("What we collect", "Hangi verileri topluyoruz"),
    body: l(
      "When you fill in a form we store the details you enter, the page you sent it from and campaign parameters in the link you followed.",
      "Bir form doldurduğunuzda girdiğiniz bilgileri, formu gönderdiğiniz sayfayı ve takip ettiğiniz bağlantıdaki kampanya parametrelerini saklarız.",
    ),
  },
  LegalSection {
    heading: l("How we use it", "Nasıl kullanıyoruz"),
    body: l(
      "Only to answer your request and to understand which campaigns bring visitors.",
      "Yalnızca talebinizi yanıtlamak ve hangi kampanyaların ziyaretçi getirdiğini anlamak için.",
    ),
  },
  LegalSection {
    heading: l("Your rights", "Haklarınız"),
    body: l(
      "You can ask for a copy of your data or its deletion at privacy@northwind.example.",
      "Verilerinizin bir kopyasını veya silinmesini privacy@northwind.example adresinden talep edebilirsiniz.",
    ),
  },
];

static TERMS: [LegalSection; 2] = [
  LegalSection {
    heading: l("Using the service", "Hizmetin kullanımı"),
    body: l(
      "Accounts are personal. You are responsible for the content your team uploads.",
      "Hesaplar kişiseldir. Ekibinizin yüklediği içerikten siz sorumlusunuz.",
    ),
  },
  LegalSection {
    heading: l("Billing", "Faturalandırma"),
    body: l(
      "Plans renew automatically at the end of each billing period unless cancelled.",
      "Paketler iptal edilmedikçe her fatura döneminin sonunda otomatik olarak yenilenir.",
    ),
  },
];

static COOKIES: [LegalSection; 2] = [
  LegalSection {
    heading: l("Essential cookies", "Zorunlu çerezler"),
    body: l(
      "Keep your language choice and form drafts between visits.",
      "Dil tercihinizi ve form taslaklarınızı ziyaretler arasında saklar.",
    ),
  },
  LegalSection {
    heading: l("Analytics", "Analitik"),
    body: l(
      "Count form submissions by outcome. No personal details are sent.",
      "Form gönderimlerini sonuca göre sayar. Kişisel bilgi gönderilmez.",
    ),
  },
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn yearly_billing_is_discounted() {
    assert_eq!(monthly_price(49, Billing::Monthly), 49);
    assert_eq!(monthly_price(49, Billing::Yearly), 39);
    assert_eq!(monthly_price(19, Billing::Yearly), 15);
    assert_eq!(monthly_price(0, Billing::Yearly), 0);
  }

  #[test]
  fn legal_slugs() {
    for doc in LegalDoc::ALL {
      assert_eq!(LegalDoc::from_slug(doc.slug()), Some(doc));
      assert!(!doc.sections().is_empty());
    }
    assert_eq!(LegalDoc::from_slug("imprint"), None);
  }

  #[test]
  fn comparison_table_matches_tiers() {
    assert_eq!(COMPARISON[0].cells.len(), TIERS.len());
    assert_eq!(TIERS.iter().filter(|t| t.highlighted).count(), 1);
  }
}
