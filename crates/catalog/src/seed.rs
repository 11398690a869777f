//! The museum's published content.
//!
//! Every catalog is rebuilt on each call; callers that serve many requests
//! build them once and share them.

use std::collections::BTreeMap;

use musee_core::{DomainResult, ItemId, Money};

use crate::item::{
    Artwork, ArtworkDetail, Capacity, Locale, LocalizedText, MuseumEvent, QuizQuestion,
    ShopProduct, TicketKind, TicketType, TourSection,
};
use crate::store::Catalog;

const IMG_MASK: &str = "https://images.unsplash.com/photo-1582555172866-f73bb12a2ab3";
const IMG_THRONE: &str = "https://images.unsplash.com/photo-1610701596007-11502861dcfa";
const IMG_TEXTILE: &str = "https://images.unsplash.com/photo-1566753323558-f4e0952af115";
const IMG_STATUE: &str = "https://images.unsplash.com/photo-1569098644584-210bcd375b59";
const IMG_HALL: &str = "https://images.unsplash.com/photo-1564221710304-0b37c8b9d729";

/// Video shown on the virtual tour page and on artwork detail pages.
pub const TOUR_VIDEO: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

fn sized(base: &str, w: u32, h: u32) -> String {
    format!("{base}?w={w}&h={h}&fit=crop")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn artwork(
    id: u32,
    title: &str,
    origin: &str,
    category: &str,
    period: &str,
    likes: u32,
    image: &str,
) -> Artwork {
    Artwork {
        id: ItemId::new(id),
        title: title.to_string(),
        origin: origin.to_string(),
        category: category.to_string(),
        period: period.to_string(),
        likes,
        image: sized(image, 400, 400),
    }
}

/// The permanent collection.
pub fn artworks() -> Catalog<Artwork> {
    let items = vec![
        artwork(1, "Masque Dan", "Côte d'Ivoire", "Masques", "XIXe siècle", 234, IMG_MASK),
        artwork(2, "Trône Bamoun", "Cameroun", "Mobilier", "XVIIIe siècle", 189, IMG_THRONE),
        artwork(3, "Tissage Kente", "Ghana", "Textiles", "XXe siècle", 312, IMG_TEXTILE),
        artwork(4, "Statue Sénoufo", "Mali", "Sculptures", "XIXe siècle", 276, IMG_STATUE),
        artwork(5, "Masque Baoulé", "Côte d'Ivoire", "Masques", "XIXe siècle", 156, IMG_MASK),
        artwork(6, "Poterie Berbère", "Maroc", "Céramiques", "XXe siècle", 98, IMG_THRONE),
        artwork(7, "Sculpture Dogon", "Mali", "Sculptures", "XVIIIe siècle", 203, IMG_STATUE),
        artwork(8, "Bijoux Touareg", "Niger", "Bijouterie", "XXe siècle", 145, IMG_TEXTILE),
        artwork(9, "Masque Fang", "Gabon", "Masques", "XIXe siècle", 187, IMG_MASK),
        artwork(10, "Tambour Djembé", "Guinée", "Instruments", "XXe siècle", 223, IMG_THRONE),
        artwork(11, "Statuette Ashanti", "Ghana", "Sculptures", "XVIIIe siècle", 165, IMG_STATUE),
        artwork(12, "Panier Zoulou", "Afrique du Sud", "Artisanat", "XXe siècle", 132, IMG_TEXTILE),
    ];
    let categories = strings(&[
        "Masques",
        "Sculptures",
        "Textiles",
        "Céramiques",
        "Bijouterie",
        "Mobilier",
        "Instruments",
        "Artisanat",
    ]);
    Catalog::new(items, categories)
}

/// Detail page of an artwork of the collection.
///
/// Only some artworks have authored descriptions; the others come back with
/// an empty description map.
pub fn artwork_detail(id: ItemId) -> Option<ArtworkDetail> {
    let artwork = artworks().get(id)?.clone();
    let image = artwork.image.replace("w=400&h=400", "w=800&h=800");
    let descriptions = authored_descriptions(id);
    let video = (!descriptions.is_empty()).then(|| TOUR_VIDEO.to_string());
    Some(ArtworkDetail {
        artwork,
        image,
        video,
        descriptions,
    })
}

fn authored_descriptions(id: ItemId) -> BTreeMap<Locale, LocalizedText> {
    let mut map = BTreeMap::new();
    if id != ItemId::new(1) {
        return map;
    }
    map.insert(
        Locale::Fr,
        LocalizedText {
            title: "Masque Dan - Tradition de Côte d'Ivoire".to_string(),
            text: "Le masque Dan est un chef-d'œuvre de l'art africain traditionnel, originaire de la région frontalière entre la Côte d'Ivoire et le Liberia. Ces masques jouent un rôle central dans les cérémonies rituelles et les performances culturelles de la société Dan. Sculpté dans du bois dur avec une précision remarquable, ce masque présente des traits stylisés caractéristiques : un front bombé, des yeux en amande, un nez aquilin et une bouche finement ciselée. Les Dan croient que ces masques sont habités par des esprits et servent d'intermédiaires entre le monde visible et invisible. Chaque masque a sa propre personnalité et fonction spécifique dans la société - certains sont des juges, d'autres des guerriers ou des danseurs. La patine sombre du bois témoigne de son utilisation régulière lors de cérémonies importantes. Les scarifications tribales reproduites sur le masque représentent l'identité et le statut social. Ce masque particulier date du XIXe siècle et présente une conservation exceptionnelle, permettant d'apprécier le savoir-faire artisanal ancestral des sculpteurs Dan.".to_string(),
        },
    );
    map.insert(
        Locale::En,
        LocalizedText {
            title: "Dan Mask - Tradition from Ivory Coast".to_string(),
            text: "The Dan mask is a masterpiece of traditional African art, originating from the border region between Ivory Coast and Liberia. These masks play a central role in ritual ceremonies and cultural performances of Dan society. Carved from hardwood with remarkable precision, this mask displays characteristic stylized features: a domed forehead, almond-shaped eyes, an aquiline nose, and a finely chiseled mouth. The Dan people believe these masks are inhabited by spirits and serve as intermediaries between the visible and invisible worlds. Each mask has its own personality and specific function in society - some are judges, others warriors or dancers. The dark patina of the wood testifies to its regular use during important ceremonies. The tribal scarifications reproduced on the mask represent identity and social status. This particular mask dates from the 19th century and shows exceptional preservation, allowing us to appreciate the ancestral craftsmanship of Dan sculptors.".to_string(),
        },
    );
    map.insert(
        Locale::Wo,
        LocalizedText {
            title: "Masque Dan - Aada bu Côte d'Ivoire".to_string(),
            text: "Masque Dan mooy benn chef-d'œuvre bu art africain bu njëkk, jóge ci diiwaan ci biir Côte d'Ivoire ak Liberia. Yii mask dañuy am njëkk bu mag ci seremoni yu ñu def ak performances yu kulture ci société Dan. Mu sculté ci benn garab bu gëna mag ak precision bu wuute mat, mii mask dafay wone ay trait stylisé yu caractéristique: benn front bu bombé, ay bët yi mel ni amande, benn nez aquilin, ak benn gemmiñ bu ñu cisele bu baax. Dan yi dañuy gëm ne yii mask dañu wone ak esprits yi di intermediaire ci biir àdduna buy gis ak buy gis. Benn mask bu nekk am na say personnalité ak fonction bu ànd ci société - yeneen mooy juge, yeneen soldats walla danseur. Patine bu ñuul ci garab bi dafay wone ne dañu ko jëfandikoo bu baax ci seremoni yu mag. Yii scarifications tribales yi reproduit ci mask bi dañuy représenter identité ak statut social. Mii mask bu nekk mooy XIXe siècle te am na conservation bu wuute mat, moo tax ñu mana gis savoir-faire artisanal bu kàddu ci sculpteurs Dan yi.".to_string(),
        },
    );
    map
}

fn product(id: u32, name: &str, category: &str, price: u64, image: &str, description: &str) -> ShopProduct {
    ShopProduct {
        id: ItemId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        price: Money::xof(price),
        image: sized(image, 400, 400),
        description: description.to_string(),
    }
}

/// The museum shop.
pub fn shop_products() -> Catalog<ShopProduct> {
    let items = vec![
        product(1, "Masque Décoratif Dan", "Décoration", 45000, IMG_MASK, "Réplique artisanale d'un masque traditionnel Dan"),
        product(2, "Tissu Kente Authentique", "Textiles", 35000, IMG_TEXTILE, "Tissu tissé à la main, 2m x 1.5m"),
        product(3, "Statuette Ancestrale", "Sculptures", 28000, IMG_STATUE, "Sculpture en bois d'ébène, 30cm"),
        product(4, "Collier Touareg", "Bijoux", 15000, IMG_THRONE, "Bijou traditionnel en argent massif"),
        product(5, "Catalogue du Musée", "Livres", 8000, IMG_MASK, "Édition 2025 avec 200 pages illustrées"),
        product(6, "Poterie Berbère", "Céramiques", 22000, IMG_THRONE, "Vase décoratif peint à la main"),
        product(7, "Djembé Traditionnel", "Instruments", 55000, IMG_TEXTILE, "Tambour authentique, hauteur 50cm"),
        product(8, "Carte Postale Set", "Papeterie", 3000, IMG_STATUE, "Lot de 10 cartes postales"),
    ];
    let categories = strings(&[
        "Décoration",
        "Textiles",
        "Sculptures",
        "Bijoux",
        "Livres",
        "Céramiques",
        "Instruments",
        "Papeterie",
    ]);
    Catalog::new(items, categories)
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: u32,
    title: &str,
    description: &str,
    date: &str,
    time: &str,
    location: &str,
    capacity: Capacity,
    image: &str,
    category: &str,
) -> MuseumEvent {
    MuseumEvent {
        id: ItemId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        capacity,
        image: sized(image, 800, 500),
        category: category.to_string(),
    }
}

/// The events calendar.
pub fn events() -> Catalog<MuseumEvent> {
    let items = vec![
        event(
            1,
            "Exposition: L'Art du Masque",
            "Une exploration fascinante des masques traditionnels africains à travers les âges et les cultures.",
            "15-30 Octobre 2025",
            "10h00 - 18h00",
            "Grande Galerie",
            Capacity::Unlimited,
            IMG_MASK,
            "Exposition",
        ),
        event(
            2,
            "Conférence: Civilisations Africaines Anciennes",
            "Plongée dans l'histoire des grandes civilisations africaines avec le Professeur Amadou Diop.",
            "20 Octobre 2025",
            "14h00 - 16h30",
            "Auditorium",
            Capacity::Seats(200),
            IMG_STATUE,
            "Conférence",
        ),
        event(
            3,
            "Atelier: Tissage Traditionnel",
            "Apprenez les techniques ancestrales du tissage avec des artisans expérimentés.",
            "25 Octobre 2025",
            "09h00 - 13h00",
            "Salle d'Atelier",
            Capacity::Seats(30),
            IMG_THRONE,
            "Atelier",
        ),
        event(
            4,
            "Concert: Musiques Africaines Traditionnelles",
            "Soirée musicale avec des instruments traditionnels et chants ancestraux.",
            "28 Octobre 2025",
            "19h00 - 22h00",
            "Jardin du Musée",
            Capacity::Seats(500),
            IMG_TEXTILE,
            "Concert",
        ),
        event(
            5,
            "Visite Guidée Spéciale: Les Trésors Cachés",
            "Découvrez les œuvres rarement exposées avec notre conservateur en chef.",
            "2 Novembre 2025",
            "15h00 - 17h00",
            "Collections Privées",
            Capacity::Seats(15),
            IMG_MASK,
            "Visite Guidée",
        ),
        event(
            6,
            "Festival: Journée de la Culture Africaine",
            "Une journée dédiée à la célébration de la diversité culturelle africaine avec animations, danse et gastronomie.",
            "10 Novembre 2025",
            "10h00 - 20h00",
            "Tout le Musée",
            Capacity::Unlimited,
            IMG_STATUE,
            "Festival",
        ),
    ];
    let categories = strings(&[
        "Exposition",
        "Conférence",
        "Atelier",
        "Concert",
        "Visite Guidée",
        "Festival",
    ]);
    Catalog::new(items, categories)
}

/// Admission tariffs.
pub fn ticket_types() -> Vec<TicketType> {
    vec![
        TicketType {
            kind: TicketKind::Full,
            name: "Visite Libre - Tarif Plein".to_string(),
            price: Money::xof(3000),
            description: "Accès complet au musée".to_string(),
        },
        TicketType {
            kind: TicketKind::Student,
            name: "Tarif Scolaire/Étudiant".to_string(),
            price: Money::xof(500),
            description: "Sur présentation de la carte étudiant".to_string(),
        },
        TicketType {
            kind: TicketKind::Group,
            name: "Groupe (10-30 personnes)".to_string(),
            price: Money::xof(2500),
            description: "Tarif par personne".to_string(),
        },
    ]
}

fn section(title: &str, description: &str, thumbnail: &str, duration: &str) -> TourSection {
    TourSection {
        title: title.to_string(),
        description: description.to_string(),
        thumbnail: sized(thumbnail, 400, 300),
        duration: duration.to_string(),
    }
}

/// Rooms of the virtual tour, in visiting order.
pub fn tour_sections() -> Vec<TourSection> {
    vec![
        section("Hall d'Entrée", "Découvrez l'architecture majestueuse", IMG_HALL, "3:45"),
        section("Galerie des Masques", "Collection unique de masques traditionnels", IMG_MASK, "5:20"),
        section("Salle des Textiles", "Arts du tissage et de la broderie", IMG_TEXTILE, "4:15"),
        section("Exposition Sculptures", "Statuaires et sculptures anciennes", IMG_STATUE, "6:30"),
        section("Salle des Instruments", "Instruments de musique traditionnels", IMG_THRONE, "4:00"),
        section("Jardin du Musée", "Espace extérieur et sculptures monumentales", IMG_TEXTILE, "3:30"),
    ]
}

/// The cultural quiz, in asking order.
pub fn quiz_questions() -> DomainResult<Vec<QuizQuestion>> {
    Ok(vec![
        QuizQuestion::new(
            "De quel pays provient le masque Dan ?",
            sized(IMG_MASK, 600, 400),
            strings(&["Ghana", "Côte d'Ivoire", "Sénégal", "Nigeria"]),
            1,
            "Le masque Dan est originaire de la région frontalière entre la Côte d'Ivoire et le Liberia.",
        )?,
        QuizQuestion::new(
            "Quel est le nom du tissu traditionnel ghanéen ?",
            sized(IMG_TEXTILE, 600, 400),
            strings(&["Bogolan", "Kente", "Mudcloth", "Ankara"]),
            1,
            "Le Kente est un tissu traditionnel du Ghana, tissé à la main avec des motifs colorés symboliques.",
        )?,
        QuizQuestion::new(
            "À quelle période remonte la civilisation de l'Égypte Antique ?",
            sized(IMG_STATUE, 600, 400),
            strings(&["3000 av. J.-C.", "1000 av. J.-C.", "500 apr. J.-C.", "1500 apr. J.-C."]),
            0,
            "La civilisation égyptienne antique a commencé vers 3000 av. J.-C. et a duré plus de 3000 ans.",
        )?,
        QuizQuestion::new(
            "Quel instrument de musique est le djembé ?",
            sized(IMG_THRONE, 600, 400),
            strings(&["Une flûte", "Un tambour", "Une harpe", "Une guitare"]),
            1,
            "Le djembé est un tambour traditionnel d'Afrique de l'Ouest, joué avec les mains.",
        )?,
        QuizQuestion::new(
            "Quelle est la fonction principale des masques africains traditionnels ?",
            sized(IMG_MASK, 600, 400),
            strings(&["Décoration", "Rituels et cérémonies", "Commerce", "Protection du soleil"]),
            1,
            "Les masques africains jouent un rôle central dans les rituels, cérémonies et performances culturelles.",
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_unique_ids() {
        let artworks = artworks();
        let mut ids: Vec<ItemId> = artworks.items().iter().map(|a| a.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), artworks.len());

        let shop = shop_products();
        let mut ids: Vec<ItemId> = shop.items().iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), shop.len());
    }

    #[test]
    fn every_item_category_is_an_offered_facet() {
        let artworks = artworks();
        let facets = artworks.facets();
        assert!(artworks.items().iter().all(|a| facets.contains(&a.category.as_str())));

        let shop = shop_products();
        let facets = shop.facets();
        assert!(shop.items().iter().all(|p| facets.contains(&p.category.as_str())));
    }

    #[test]
    fn masque_dan_detail_has_three_locales() {
        let detail = artwork_detail(ItemId::new(1)).unwrap();
        assert_eq!(detail.locales(), vec![Locale::Fr, Locale::En, Locale::Wo]);
        assert!(detail.description(Locale::En).unwrap().title.starts_with("Dan Mask"));
        assert!(detail.image.contains("w=800&h=800"));
        assert!(detail.video.is_some());
    }

    #[test]
    fn unknown_artwork_has_no_detail() {
        assert!(artwork_detail(ItemId::new(404)).is_none());
    }

    #[test]
    fn quiz_has_five_valid_questions() {
        let questions = quiz_questions().unwrap();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.correct_answer() < q.answers().len()));
    }

    #[test]
    fn ticket_prices() {
        let prices: Vec<u64> = ticket_types().iter().map(|t| t.price.amount()).collect();
        assert_eq!(prices, vec![3000, 500, 2500]);
    }
}
