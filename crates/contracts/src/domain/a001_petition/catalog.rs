//! Catalog of petition document types grouped by legal area.

use crate::shared::text::turkish_lowercase;
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Family,
    Labor,
    RealEstate,
    Criminal,
    Enforcement,
    Consumer,
    Cyber,
    Commercial,
    Insurance,
    Administrative,
    Foreigners,
    IntellectualProperty,
    Health,
}

impl Category {
    pub fn all() -> [Category; 13] {
        [
            Category::Family,
            Category::Labor,
            Category::RealEstate,
            Category::Criminal,
            Category::Enforcement,
            Category::Consumer,
            Category::Cyber,
            Category::Commercial,
            Category::Insurance,
            Category::Administrative,
            Category::Foreigners,
            Category::IntellectualProperty,
            Category::Health,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Family => "Aile Hukuku",
            Category::Labor => "İş Hukuku",
            Category::RealEstate => "Kira ve Gayrimenkul",
            Category::Criminal => "Ceza Hukuku",
            Category::Enforcement => "İcra ve İflas",
            Category::Consumer => "Tüketici Hukuku",
            Category::Cyber => "Bilişim ve İnternet",
            Category::Commercial => "Şirketler ve Ticaret",
            Category::Insurance => "Sigorta Hukuku",
            Category::Administrative => "İdare Hukuku",
            Category::Foreigners => "Yabancılar Hukuku",
            Category::IntellectualProperty => "Fikri Mülkiyet",
            Category::Health => "Sağlık Hukuku",
        }
    }
}

/// One selectable petition type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentType {
    pub key: &'static str,
    pub display_name: &'static str,
    /// Used as the subject placeholder and as the subject when the user leaves it empty.
    pub default_subject: &'static str,
    pub category: Category,
}

/// Fallback title when a key is missing from the catalog.
pub const FALLBACK_TITLE: &str = "Dilekçe Bilgileri";
pub const FALLBACK_NAME: &str = "Dilekce";
pub const FALLBACK_SUBJECT: &str = "Dava Konusu";

const fn doc(
    key: &'static str,
    display_name: &'static str,
    default_subject: &'static str,
    category: Category,
) -> DocumentType {
    DocumentType {
        key,
        display_name,
        default_subject,
        category,
    }
}

pub static DOCUMENT_TYPES: &[DocumentType] = &[
    doc("bosanma", "Çekişmeli Boşanma Davası", "Çekişmeli boşanma, maddi/manevi tazminat ve velayet talebi", Category::Family),
    doc("anlasmali-bosanma", "Anlaşmalı Boşanma Davası", "Protokol hükümleri çerçevesinde anlaşmalı boşanma talebi", Category::Family),
    doc("zina-bosanma", "Zina Nedeniyle Boşanma", "Zina (aldatma) nedeniyle boşanma ve tazminat", Category::Family),
    doc("terk-bosanma", "Terk Nedeniyle Boşanma", "Terk (eve dönmeme) nedeniyle boşanma", Category::Family),
    doc("velayet", "Velayet Davası Dilekçesi", "Velayetin anneye/babaya verilmesi talebi", Category::Family),
    doc("velayet-degistirme", "Velayetin Değiştirilmesi Talebi", "Değişen şartlar nedeniyle velayetin değiştirilmesi (nez'i)", Category::Family),
    doc("kisisel-iliski", "Çocukla Kişisel İlişki Kurulması", "Çocuk ile şahsi ilişki kurulması veya süresinin artırılması", Category::Family),
    doc("nafaka", "Nafaka Davası Dilekçesi", "İştirak/Yoksulluk nafakasının bağlanması", Category::Family),
    doc("nafaka-artirim", "Nafaka Artırım Davası", "Ekonomik koşullar nedeniyle nafaka artırımı", Category::Family),
    doc("nafaka-azaltim", "Nafaka Azaltım Davası", "Ödeme güçlüğü nedeniyle nafaka indirimi/kaldırılması", Category::Family),
    doc("babalik", "Babalık Davası Dilekçesi", "DNA testi ile babalığın tespiti ve tescili", Category::Family),
    doc("soybaginin-reddi", "Soybağının Reddi Dilekçesi", "Nesebin (soybağının) reddi talebi", Category::Family),
    doc("iddet-muddeti", "İddet Müddetinin Kaldırılması", "Kadının 300 günlük bekleme süresinin kaldırılması", Category::Family),
    doc("evlat-edinme", "Evlat Edinme Başvurusu", "Küçüğün evlat edinilmesi için izin talebi", Category::Family),
    doc("aile-konutu", "Aile Konutu Şerhi Konulması", "Tapuya aile konutu şerhi işlenmesi", Category::Family),
    doc("soyadi-degisikligi", "Soyadı Değişikliği Davası", "Haklı nedenlerle isim/soyisim değişikliği", Category::Family),
    doc("yurtdisi-cikis", "Çocuğun Yurtdışına Çıkış İzni", "Velayeti kendisinde olan tarafın çocuğu yurtdışına çıkarma izni", Category::Family),
    doc("mal-rejimi", "Mal Rejimi Tasfiye Dilekçesi", "Edinilmiş mallara katılma ve katkı payı alacağı", Category::Family),
    doc("ziynet", "Ziynet Eşyası İadesi Davası", "Düğün takılarının (ziynet eşyası) iadesi veya bedeli", Category::Family),
    doc("kidem-tazminati", "Kıdem Tazminatı Dilekçesi", "Ödenmeyen kıdem tazminatı alacağı", Category::Labor),
    doc("ihbar-tazminati", "İhbar Tazminatı Dilekçesi", "İhbar süresine uyulmadığından tazminat talebi", Category::Labor),
    doc("ise-iade", "İşe İade Davası Dilekçesi", "Feshin geçersizliği, işe iade ve boşta geçen süre ücreti", Category::Labor),
    doc("fazla-mesai", "Fazla Mesai Alacağı Dilekçesi", "Ödenmeyen fazla mesai ücretlerinin tahsili", Category::Labor),
    doc("ucret-alacagi", "Ödenmeyen Ücret Alacağı", "Ödenmeyen maaş/ücret alacaklarının tahsili", Category::Labor),
    doc("yillik-izin", "Yıllık İzin Ücreti Alacağı", "Kullandırılmayan yıllık izin ücretlerinin tahsili", Category::Labor),
    doc("is-kazasi", "İş Kazası Maddi/Manevi Tazminat", "İş kazası sonucu maluliyet/ölüm nedeniyle tazminat", Category::Labor),
    doc("mobbing", "Mobbing Nedeniyle Haklı Fesih", "Sistematik psikolojik taciz nedeniyle haklı fesih", Category::Labor),
    doc("sigorta-tespit", "Hizmet Tespit Davası", "Kuruma bildirilmeyen hizmet günlerinin tespiti", Category::Labor),
    doc("kotu-niyet", "Kötü Niyet Tazminatı Davası", "İşverenin kötü niyetli feshi nedeniyle tazminat", Category::Labor),
    doc("tahliye", "Tahliye Davası (Temerrüt)", "Kira borcunun ödenmemesi nedeniyle tahliye", Category::RealEstate),
    doc("ihtiyac-tahliye", "İhtiyaç Nedeniyle Tahliye", "Konut/İşyeri gereksinimi nedeniyle tahliye", Category::RealEstate),
    doc("tahliye-taahhut", "Tahliye Taahhüdüne Dayalı Tahliye", "Yazılı tahliye taahhüdüne dayalı tahliye", Category::RealEstate),
    doc("kira-tespit", "Kira Tespit Davası", "5 yılı dolduran kiracının kira bedelinin piyasaya göre tespiti", Category::RealEstate),
    doc("kira-alacagi", "Kira Alacağı İcra Takibi/Dava", "Ödenmeyen kira bedellerinin tahsili", Category::RealEstate),
    doc("kira-uyarlama", "Kira Uyarlama Davası", "Olağanüstü hallerde kira bedelinin uyarlanması", Category::RealEstate),
    doc("elatmanin-onlenmesi", "Müdahalenin Men'i (El Atmanın Önlenmesi)", "Haksız işgalin (müdahalenin) önlenmesi", Category::RealEstate),
    doc("ecrimisil", "Ecrimisil (Haksız İşgal) Tazminatı", "Haksız kullanım nedeniyle işgal tazminatı", Category::RealEstate),
    doc("izale-i-suyu", "İzale-i Şuyu (Ortaklığın Giderilmesi)", "Fiziksel taksim veya satış suretiyle ortaklığın giderilmesi", Category::RealEstate),
    doc("tapu-iptal", "Tapu İptal ve Tescil Davası", "Yolsuz tescil nedeniyle tapu kaydının iptali ve tescili", Category::RealEstate),
    doc("sufa", "Önalım (Şufa) Hakkı Davası", "Paylı mülkiyette önalım hakkının kullanılması", Category::RealEstate),
    doc("gecit-hakki", "Geçit Hakkı Kurulması Talebi", "Zorunlu geçit hakkı kurulması", Category::RealEstate),
    doc("kat-karsiligi", "Kat Karşılığı İnşaat Sözl. Feshi", "İnşaatın tamamlanmaması nedeniyle sözleşme feshi", Category::RealEstate),
    doc("yonetim-plani", "Yönetim Planı İptali", "Kanuna aykırı yönetim planı maddesinin iptali", Category::RealEstate),
    doc("komsuluk-hukuku", "Komşuluk Hukukuna Aykırılık", "Gürültü, koku vb. nedenlerle komşuluk hakkı ihlali", Category::RealEstate),
    doc("suc-duyurusu", "Suç Duyurusu (Genel)", "Cumhuriyet Başsavcılığına şikayet dilekçesi", Category::Criminal),
    doc("dolandiricilik", "Dolandırıcılık Suç Duyurusu", "TCK 157/158 Dolandırıcılık suçu şikayeti", Category::Criminal),
    doc("hakaret-tehdit", "Hakaret ve Tehdit Suç Duyurusu", "Hakaret, tehdit ve şantaj suçlaması", Category::Criminal),
    doc("savunma", "Savunma Dilekçesi (Mahkeme)", "İddianameye veya esas hakkındaki mütalaaya karşı savunma", Category::Criminal),
    doc("ifade-verme", "Yazılı İfade Sunma", "Soruşturma aşamasında yazılı ifade", Category::Criminal),
    doc("tutukluluk-itiraz", "Tutukluluğa İtiraz Dilekçesi", "Tutuklama kararının kaldırılarak tahliye talebi", Category::Criminal),
    doc("adli-kontrol-itiraz", "Adli Kontrole İtiraz", "İmza vb. adli kontrol tedbirinin kaldırılması", Category::Criminal),
    doc("hagb-itiraz", "HAGB Kararına İtiraz", "Hükmün açıklanmasının geri bırakılması kararına itiraz", Category::Criminal),
    doc("kyok-itiraz", "Kovuşturmaya Yer Olmadığına İtiraz", "Kovuşturmaya Yer Olmadığı (Takipsizlik) kararına itiraz", Category::Criminal),
    doc("istinaf-ceza", "Ceza İstinaf Başvuru Dilekçesi", "Yerel mahkeme kararına karşı İstinaf başvurusu", Category::Criminal),
    doc("koruma-karari", "6284 Sayılı Kanun Koruma Talebi", "Şiddet tehdidi nedeniyle 6284 s. K. uyarınca önleyici tedbir", Category::Criminal),
    doc("uzlasma", "Uzlaşma Talep/Kabul Beyanı", "Uzlaşma teklifine beyan", Category::Criminal),
    doc("adli-sicil", "Adli Sicil Kaydı Silme (Memnu Hak)", "Yasal şartlar oluştuğundan adli sicil kaydının silinmesi", Category::Criminal),
    doc("infaz-erteleme", "Cezanın İnfazının Ertelenmesi", "Hastalık/Gebelik vb. nedenlerle infazın ertelenmesi", Category::Criminal),
    doc("icra-takibi", "İlamsız İcra Takibi Talebi", "Fatura/Belgeye dayalı ilamsız takip talebi", Category::Enforcement),
    doc("icra-itiraz", "Ödeme Emrine İtiraz", "Borca, faize ve yetkiye itiraz", Category::Enforcement),
    doc("imza-itiraz", "İmzaya İtiraz Dilekçesi", "Senetteki imzanın sahteliği iddiasıyla itiraz", Category::Enforcement),
    doc("itirazin-iptali", "İtirazın İptali Davası", "Borçlunun haksız itirazının iptali ve inkar tazminatı", Category::Enforcement),
    doc("itirazin-kaldirilmasi", "İtirazın Kaldırılması Talebi", "İcra Hukuk Mahkemesinde itirazın kaldırılması", Category::Enforcement),
    doc("menfi-tespit", "Menfi Tespit (Borçsuzluk) Davası", "İcra tehdidi altındaki borcun olmadığının tespiti", Category::Enforcement),
    doc("istirdat", "İstirdat (Geri Alım) Davası", "Cebri icra tehdidiyle ödenen paranın geri alınması", Category::Enforcement),
    doc("ihalenin-feshi", "İhalenin Feshi Davası", "Usulsüzlük nedeniyle icra ihalesinin feshi", Category::Enforcement),
    doc("kiymet-takdiri", "Kıymet Takdirine İtiraz", "Hacizli malın değer tespitine itiraz", Category::Enforcement),
    doc("istihkak", "İstihkak Davası Dilekçesi", "Haczedilen malın 3. kişiye ait olduğu iddiası", Category::Enforcement),
    doc("ihtiyati-haciz", "İhtiyati Haciz Talebi", "Alacağın güvence altına alınması için ihtiyati haciz", Category::Enforcement),
    doc("maas-haczi-itiraz", "Maaş Haczine Müzekkere İtirazı", "Haczedilmezlik veya oran hatası nedeniyle maaş haczine itiraz", Category::Enforcement),
    doc("haczedilmezlik", "Meskeniyet (Haczedilmezlik) Şikayeti", "Tek konutun (meskenin) haczine itiraz", Category::Enforcement),
    doc("cek-iptali", "Çek İptali Davası", "Rızası dışında elden çıkan çekin iptali", Category::Enforcement),
    doc("tuketici-hakem", "Tüketici Hakem Heyeti Başvurusu", "Tüketici Hakem Heyetine ayıplı mal başvurusu", Category::Consumer),
    doc("tuketici-dava", "Tüketici Mahkemesi Dava Dilekçesi", "Tüketici Mahkemesinde dava açılması", Category::Consumer),
    doc("ayipli-mal", "Ayıplı Mal Bedel İadesi", "Ayıplı ürünün değişimi veya iadesi", Category::Consumer),
    doc("ayipli-hizmet", "Ayıplı Hizmet Tazminatı", "Hatalı hizmet nedeniyle bedel iadesi/tazminat", Category::Consumer),
    doc("ayipli-arac", "Ayıplı Araç (Sıfır/İkinci El) İadesi", "Gizli ayıplı aracın iadesi veya değer kaybı", Category::Consumer),
    doc("devre-mulk", "Devre Mülk İptali ve Bedel İadesi", "Cayma hakkı veya ifa imkansızlığı nedeniyle iptal", Category::Consumer),
    doc("banka-ucret", "Banka Dosya Masrafı İadesi", "Haksız alınan dosya masrafının iadesi", Category::Consumer),
    doc("kredi-karti", "Kredi Kartı Aidatı İadesi", "Yıllık kart aidatının iadesi", Category::Consumer),
    doc("abonelik-iptal", "Abonelik İptal Başvurusu", "İnternet/GSM aboneliğinin iptali", Category::Consumer),
    doc("erisim-engelleme", "Erişim Engelleme (Sulh Ceza)", "5651 s. K. uyarınca kişilik hakları ihlali", Category::Cyber),
    doc("icerik-kaldirma", "İçerik Kaldırma İhtarnamesi", "İnternet sitesi/yer sağlayıcıya ihtar", Category::Cyber),
    doc("unutulma-hakki", "Unutulma Hakkı Başvurusu", "Eski tarihli haberlerin arama motorundan silinmesi", Category::Cyber),
    doc("kvkk-sikayet", "KVKK Kuruluna Şikayet", "Kişisel verilerin hukuka aykırı işlenmesi şikayeti", Category::Cyber),
    doc("sosyal-medya", "Sosyal Medya Hesabı Çalınması", "Hesap hırsızlığı nedeniyle şikayet ve erişim engeli", Category::Cyber),
    doc("sirket-kurulus", "Şirket Kuruluş Sözleşmesi", "Anonim/Limited şirket ana sözleşmesi", Category::Commercial),
    doc("genel-kurul-iptal", "Genel Kurul Kararının İptali", "Kanuna/Sözleşmeye aykırı genel kurul karar iptali", Category::Commercial),
    doc("sirket-fesih", "Şirketin Haklı Nedenle Feshi", "Haklı nedenlerle şirketin feshi ve tasfiyesi", Category::Commercial),
    doc("yonetici-sorumluluk", "Yöneticilerin Sorumluluğu Davası", "Yönetim kurulu üyelerinin hukuki sorumluluğu", Category::Commercial),
    doc("haksiz-rekabet", "Haksız Rekabetin Önlenmesi", "TTK uyarınca haksız rekabetin tespiti ve önlenmesi", Category::Commercial),
    doc("konkordato", "Konkordato Talep Dilekçesi", "Borçların yapılandırılması için konkordato mühleti talebi", Category::Commercial),
    doc("iflas", "İflas Yoluyla Takip/Dava", "Doğrudan veya takipli iflas talebi", Category::Commercial),
    doc("ticari-alacak", "Ticari Alacak Davası", "Ticari satımdan kaynaklanan alacak davası", Category::Commercial),
    doc("fatura-itiraz", "Faturaya İtiraz İhtarnamesi", "8 gün içinde faturaya itiraz", Category::Commercial),
    doc("arac-deger-kaybi", "Araç Değer Kaybı Başvurusu", "Eksper raporuna dayalı değer kaybı talebi", Category::Insurance),
    doc("hasar-tazminati", "Trafik Hasar Tazminatı", "Kasko/Trafik sigortasından hasar tahsili", Category::Insurance),
    doc("bedeni-hasar", "Bedeni Hasar (Yaralanma) Tazminatı", "Sürekli/Geçici iş göremezlik tazminatı", Category::Insurance),
    doc("destekten-yoksun", "Destekten Yoksun Kalma Tazminatı", "Vefat halinde yakınların tazminat talebi", Category::Insurance),
    doc("imm-basvuru", "İMM (İhtiyari Mali Mesuliyet) Başvurusu", "Zorunlu sigorta limitini aşan hasarlar", Category::Insurance),
    doc("sigorta-tahkim", "Sigorta Tahkim Komisyonu Başvurusu", "Sigorta Tahkim Komisyonuna başvuru", Category::Insurance),
    doc("iptal-davasi", "İdari İşlemin İptali Davası", "Menfaati ihlal eden idari işlemin iptali", Category::Administrative),
    doc("tam-yargi", "Tam Yargı (Tazminat) Davası", "İdari eylem/işlemden doğan zararın tazmini", Category::Administrative),
    doc("yurutme-durdurma", "Yürütmenin Durdurulması Talebi", "Telafisi güç zararlar nedeniyle YD talebi", Category::Administrative),
    doc("imar-iptal", "İmar Planı İptali Davası", "Nazım/Uygulama imar planının iptali", Category::Administrative),
    doc("yikim-itiraz", "Yıkım Kararına İtiraz", "Belediye yıkım kararına ve cezasına itiraz", Category::Administrative),
    doc("memur-disiplin", "Memur Disiplin Cezası İptali", "Uyarma/Kınama/İhraç cezalarının iptali", Category::Administrative),
    doc("guvenlik-sorusturmasi", "Güvenlik Soruşturması İptali", "Olumsuz güvenlik soruşturması kararının iptali", Category::Administrative),
    doc("goreve-iade", "Göreve İade Talebi", "Kamu görevine iade talebi", Category::Administrative),
    doc("vergi-itiraz", "Vergi/Ceza İhbarnamesine İtiraz", "Vergi ziyaı cezası ve usulsüzlük cezasına itiraz", Category::Administrative),
    doc("deport-itiraz", "Deport (Sınırdışı) Kararı İptali", "Sınırdışı kararına karşı İdare Mahkemesinde dava", Category::Foreigners),
    doc("ikamet-red", "İkamet İzni Reddine İtiraz", "İkamet izni başvurusunun reddine itiraz", Category::Foreigners),
    doc("calisma-izni", "Çalışma İzni Reddine İtiraz", "Çalışma izni başvurusunun reddine itiraz", Category::Foreigners),
    doc("idari-gozetim", "İdari Gözetim Kararına İtiraz", "Sulh Ceza Hakimliğine idari gözetim itirazı", Category::Foreigners),
    doc("vatandaslik", "Vatandaşlık Başvurusu Reddine İtiraz", "Vatandaşlık başvurusunun reddine itiraz", Category::Foreigners),
    doc("marka-tecavuz", "Marka Hakkına Tecavüz Davası", "Marka hakkına tecavüzün durdurulması", Category::IntellectualProperty),
    doc("telif-ihlali", "Fikir ve Sanat Eseri Telif İhlali", "İzinsiz eser kullanımı nedeniyle tazminat", Category::IntellectualProperty),
    doc("patent-hukumsuzluk", "Patent Hükümsüzlüğü Davası", "Yenilik/tekniğin bilinen durumu nedeniyle hükümsüzlük", Category::IntellectualProperty),
    doc("tecavuz-ref", "Tecavüzün Ref'i (Giderilmesi) Davası", "Tecavüzün ref'i (giderilmesi) ve men'i (önlenmesi)", Category::IntellectualProperty),
    doc("marka-itiraz", "TPE Marka Yayınına İtiraz", "Türk Patent Kurumu nezdinde marka yayınına itiraz", Category::IntellectualProperty),
    doc("malpraktis", "Hekim Hatası (Malpraktis) Tazminatı", "Hekim hatası nedeniyle maddi/manevi tazminat", Category::Health),
    doc("hasta-haklari", "Hasta Hakları Başvurusu", "Hasta hakları birimine/Bakanlığa şikayet", Category::Health),
    doc("ozel-hastane", "Özel Hastane Fatura İtirazı", "Fahiş veya haksız hastane faturasına itiraz", Category::Health),
];

static INDEX: Lazy<HashMap<&'static str, &'static DocumentType>> =
    Lazy::new(|| DOCUMENT_TYPES.iter().map(|d| (d.key, d)).collect());

pub fn lookup(key: &str) -> Option<&'static DocumentType> {
    INDEX.get(key).copied()
}

pub fn display_name_for(key: &str) -> &'static str {
    lookup(key).map(|d| d.display_name).unwrap_or(FALLBACK_NAME)
}

pub fn default_subject_for(key: &str) -> &'static str {
    lookup(key)
        .map(|d| d.default_subject)
        .unwrap_or(FALLBACK_SUBJECT)
}

/// Case-insensitive substring match on the display name or default subject.
pub fn matches(doc: &DocumentType, query: &str) -> bool {
    let needle = turkish_lowercase(query.trim());
    needle.is_empty()
        || turkish_lowercase(doc.display_name).contains(&needle)
        || turkish_lowercase(doc.default_subject).contains(&needle)
}

/// Picker contents for `query`, in catalog order. Categories without a
/// matching entry are left out.
pub fn filter(query: &str) -> Vec<(Category, Vec<&'static DocumentType>)> {
    Category::all()
        .into_iter()
        .filter_map(|category| {
            let docs: Vec<_> = DOCUMENT_TYPES
                .iter()
                .filter(|d| d.category == category && matches(d, query))
                .collect();
            (!docs.is_empty()).then_some((category, docs))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = DOCUMENT_TYPES.iter().map(|d| d.key).collect();
        assert_eq!(keys.len(), DOCUMENT_TYPES.len());
    }

    #[test]
    fn test_every_category_has_entries() {
        for category in Category::all() {
            assert!(DOCUMENT_TYPES.iter().any(|d| d.category == category));
        }
    }

    #[test]
    fn test_lookup_and_fallbacks() {
        let doc = lookup("ise-iade").unwrap();
        assert_eq!(doc.category, Category::Labor);
        assert_eq!(doc.display_name, "İşe İade Davası Dilekçesi");
        assert_eq!(display_name_for("yok-boyle-bir-tur"), FALLBACK_NAME);
        assert_eq!(default_subject_for("yok-boyle-bir-tur"), FALLBACK_SUBJECT);
    }

    #[test]
    fn test_filter_hides_empty_categories() {
        let groups = filter("KİRA");
        assert!(!groups.is_empty());
        assert!(groups.iter().all(|(_, docs)| !docs.is_empty()));
        assert!(groups.iter().any(|(c, _)| *c == Category::RealEstate));
        assert!(!groups.iter().any(|(c, _)| *c == Category::Health));
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let total: usize = filter("   ").iter().map(|(_, docs)| docs.len()).sum();
        assert_eq!(total, DOCUMENT_TYPES.len());
    }

    #[test]
    fn test_no_match() {
        assert!(filter("zzzz").is_empty());
    }
}
