//! Static legal documents shown in a modal from the sidebar footer.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal::Modal;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDoc {
    Privacy,
    Terms,
    Kvkk,
}

impl LegalDoc {
    pub fn all() -> [LegalDoc; 3] {
        [LegalDoc::Privacy, LegalDoc::Terms, LegalDoc::Kvkk]
    }

    pub fn title(&self) -> &'static str {
        match self {
            LegalDoc::Privacy => "Gizlilik Politikası",
            LegalDoc::Terms => "Kullanım Koşulları",
            LegalDoc::Kvkk => "KVKK Aydınlatma Metni",
        }
    }

    pub fn link_label(&self) -> &'static str {
        match self {
            LegalDoc::Privacy => "Gizlilik",
            LegalDoc::Terms => "Koşullar",
            LegalDoc::Kvkk => "KVKK",
        }
    }

    /// Trusted, compile-time HTML.
    pub fn html(&self) -> &'static str {
        match self {
            LegalDoc::Privacy => PRIVACY_HTML,
            LegalDoc::Terms => TERMS_HTML,
            LegalDoc::Kvkk => KVKK_HTML,
        }
    }
}

const PRIVACY_HTML: &str = r#"<p><strong>Son Güncelleme: 28.12.2024</strong></p>
<p>JustLaw olarak gizliliğinize önem veriyoruz. Bu politika, kişisel verilerinizin nasıl toplandığını, kullanıldığını ve korunduğunu açıklar.</p>
<h3>1. Toplanan Veriler</h3>
<p>Hizmetimizi kullanırken adınız, e-posta adresiniz ve sisteme yüklediğiniz belgelerin içerikleri işlenmektedir. Bu veriler sadece hizmetin sağlanması amacıyla kullanılır.</p>
<h3>2. Veri Güvenliği</h3>
<p>Verileriniz endüstri standardı şifreleme yöntemleri ile korunmaktadır. Yüklediğiniz belgeler analiz edildikten sonra sistemlerimizden otomatik olarak silinir veya sadece sizin erişiminize açık şekilde saklanır.</p>
<h3>3. Üçüncü Taraflar</h3>
<p>Yasal zorunluluklar haricinde verileriniz üçüncü taraflarla paylaşılmaz. Ödeme işlemleri Shopier aracılığıyla güvenli bir şekilde gerçekleştirilir.</p>
<p>Detaylı bilgi için destek@justlaw.com adresinden bize ulaşabilirsiniz.</p>"#;

const TERMS_HTML: &str = r#"<p><strong>Son Güncelleme: 28.12.2024</strong></p>
<p>JustLaw'ı kullanarak aşağıdaki koşulları kabul etmiş sayılırsınız.</p>
<h3>1. Hizmetin Niteliği</h3>
<p>JustLaw, yapay zeka destekli bir hukuki asistan hizmetidir. <strong>Sistem tarafından üretilen içerikler hukuki tavsiye niteliği taşımaz.</strong> Hukuki kararlar almadan önce mutlaka bir avukata danışmanız önerilir.</p>
<h3>2. Sorumluluk Reddi</h3>
<p>Oluşturulan dilekçeler, sözleşme analizleri ve emsal karar aramaları bilgilendirme amaçlıdır. JustLaw, bu içeriklerin doğruluğu veya güncelliği konusunda garanti vermez ve kullanımından doğacak zararlardan sorumlu tutulamaz.</p>
<h3>3. Fikri Mülkiyet</h3>
<p>Uygulamanın tasarımı, logosu ve yazılımı JustLaw'a aittir. İzinsiz kopyalanması yasaktır.</p>"#;

const KVKK_HTML: &str = r#"<p>6698 sayılı Kişisel Verilerin Korunması Kanunu ("KVKK") uyarınca, JustLaw olarak veri sorumlusu sıfatıyla kişisel verilerinizi işlemekteyiz.</p>
<h3>1. İşlenen Kişisel Veriler</h3>
<p>Kimlik bilgileri (Ad, Soyad), İletişim bilgileri (E-posta), İşlem güvenliği bilgileri (Log kayıtları).</p>
<h3>2. İşleme Amaçları</h3>
<p>Üyelik işlemlerinin gerçekleştirilmesi, hizmetlerin sunulması, yasal yükümlülüklerin yerine getirilmesi.</p>
<h3>3. Haklarınız</h3>
<p>KVKK'nın 11. maddesi uyarınca verilerinizin silinmesini, düzeltilmesini veya bilgi talep etme hakkına sahipsiniz.</p>"#;

/// Renders the open legal document, if any, from `AppGlobalContext::legal_doc`.
#[component]
#[allow(non_snake_case)]
pub fn LegalModalHost() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let close = Callback::new(move |_| ctx.legal_doc.set(None));

    view! {
        {move || {
            ctx.legal_doc.get().map(|doc| {
                view! {
                    <Modal title=doc.title().to_string() on_close=close>
                        <div class="legal-content" inner_html=doc.html()></div>
                    </Modal>
                }
            })
        }}
    }
}

/// Footer links opening the legal documents.
#[component]
#[allow(non_snake_case)]
pub fn LegalLinks() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="legal-links">
            {LegalDoc::all()
                .into_iter()
                .map(|doc| {
                    view! {
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.legal_doc.set(Some(doc));
                        }>
                            {doc.link_label()}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
