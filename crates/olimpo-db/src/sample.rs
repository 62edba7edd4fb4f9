//! Built-in sample catalogue for demo mode.
//!
//! When the server runs without a `DATABASE_URL` it serves this catalogue
//! from memory, mirroring the sample content the portal frontend bundles.

use chrono::NaiveDate;
use olimpo_types::{BlogPost, MythEntity, TimelineEvent};

use crate::memory::MemoryStore;

/// Build a [`MemoryStore`] seeded with the sample catalogue.
pub fn sample_store() -> MemoryStore {
    MemoryStore {
        entities: sample_entities(),
        primordials: sample_primordials(),
        minors: sample_minors(),
        posts: sample_posts(),
        timeline: sample_timeline(),
    }
}

fn entity(
    id: &str,
    nome: &str,
    categoria: &str,
    descricao: &str,
    dominios: &[&str],
    poderes: &[&str],
    simbolos: &[&str],
    tags: &[&str],
) -> MythEntity {
    MythEntity {
        id: id.to_owned(),
        nome: nome.to_owned(),
        categoria: categoria.to_owned(),
        descricao: descricao.to_owned(),
        dominios: strings(dominios),
        poderes: strings(poderes),
        simbolos: strings(simbolos),
        tags: strings(tags),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn sample_entities() -> Vec<MythEntity> {
    vec![
        entity(
            "zeus",
            "Zeus",
            "olimpico",
            "Rei dos deuses do Olimpo, senhor dos céus e do trovão. Zeus governa \
             sobre todos os outros deuses e é conhecido por sua autoridade suprema \
             e seus raios poderosos.",
            &["Céus", "Trovão", "Justiça"],
            &["Controle dos raios", "Metamorfose", "Autoridade divina"],
            &["Raio", "Águia", "Carvalho"],
            &["rei", "trovao", "ceu", "olimpo"],
        ),
        entity(
            "hera",
            "Hera",
            "olimpico",
            "Rainha dos deuses e esposa de Zeus, protetora do casamento e da \
             família. Conhecida por sua dignidade real e ciúmes legendários.",
            &["Casamento", "Família"],
            &["Proteção familiar", "Magia matrimonial", "Autoridade real"],
            &["Pavão", "Coroa", "Romã"],
            &["rainha", "casamento", "familia"],
        ),
        entity(
            "poseidon",
            "Poseidon",
            "olimpico",
            "Deus dos mares, oceanos e terremotos. Irmão de Zeus, governa todas \
             as águas e é temido pelos marinheiros por sua ira tempestuosa.",
            &["Mares", "Oceanos", "Terremotos"],
            &["Controle das águas", "Terremotos", "Criação de cavalos"],
            &["Tridente", "Cavalo", "Golfinho"],
            &["mar", "oceano", "terremoto"],
        ),
        entity(
            "hercules",
            "Héracles",
            "heroi",
            "O maior herói da mitologia grega, filho de Zeus. Famoso pelos Doze \
             Trabalhos e por sua força sobre-humana.",
            &[],
            &["Força sobre-humana", "Resistência", "Coragem"],
            &["Clava", "Pele do Leão de Nemeia"],
            &["forca", "trabalhos", "heroi"],
        ),
        entity(
            "aquiles",
            "Aquiles",
            "heroi",
            "Herói da Guerra de Troia.",
            &[],
            &["Habilidade de combate"],
            &["Lança"],
            &["guerra", "troia"],
        ),
    ]
}

fn sample_primordials() -> Vec<MythEntity> {
    vec![
        entity(
            "gaia",
            "Gaia",
            "primordial",
            "A Terra personificada, mãe de todos os seres. A primeira divindade \
             primordial que deu origem ao cosmos.",
            &["Terra", "Natureza"],
            &["Criação da vida", "Controle da natureza", "Sabedoria ancestral"],
            &["Terra", "Frutos", "Montanhas"],
            &["terra", "mae", "primordial"],
        ),
        entity(
            "nyx",
            "Nyx",
            "primordial",
            "A Noite personificada.",
            &["Noite"],
            &[],
            &["Estrelas"],
            &["noite"],
        ),
    ]
}

fn sample_minors() -> Vec<MythEntity> {
    vec![entity(
        "pan",
        "Pã",
        "menor",
        "Deus dos pastores, da natureza selvagem e da música pastoral. Meio \
         homem, meio bode, protetor dos rebanhos.",
        &["Natureza", "Pastores", "Música"],
        &["Música mágica", "Comunhão com animais", "Pânico"],
        &["Flauta de pã", "Cajado de pastor"],
        &["natureza", "pastores", "musica"],
    )]
}

fn sample_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: String::from("guerra-troia"),
            titulo: String::from("A Guerra de Troia: Épico de Heróis e Deuses"),
            resumo: String::from(
                "Explore a lendária guerra que durou dez anos e envolveu os \
                 maiores heróis da mitologia grega.",
            ),
            conteudo: String::from(
                "A Guerra de Troia é uma das narrativas mais épicas da mitologia \
                 grega, imortalizada na Ilíada de Homero.",
            ),
            data_publicacao: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            tags: strings(&["guerra", "troia", "herois", "iliada"]),
            livro_recomendado: Some(String::from("Ilíada, de Homero")),
        },
        BlogPost {
            id: String::from("olimpo-origem"),
            titulo: String::from("A Origem do Olimpo"),
            resumo: String::from("Como os olímpicos tomaram o poder dos titãs."),
            conteudo: String::from(
                "Depois da Titanomaquia, Zeus e seus irmãos dividiram o cosmos \
                 entre si e estabeleceram sua morada no monte Olimpo.",
            ),
            data_publicacao: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap_or_default(),
            tags: strings(&["olimpo", "titas", "zeus"]),
            livro_recomendado: None,
        },
    ]
}

fn sample_timeline() -> Vec<TimelineEvent> {
    vec![
        TimelineEvent {
            id: String::from("criacao-cosmos"),
            nome: String::from("Criação do Cosmos"),
            descricao: String::from("Do Caos surgem Gaia, Tártaro, Érebo e Nyx."),
            era: Some(String::from("Era Primordial")),
            tipo: Some(String::from("criação")),
            data_estimada: None,
            personagens: strings(&["Caos", "Gaia", "Nyx"]),
            tags: strings(&["origem"]),
        },
        TimelineEvent {
            id: String::from("titanomaquia"),
            nome: String::from("Titanomaquia"),
            descricao: String::from(
                "A guerra de dez anos entre os titãs e os deuses olímpicos.",
            ),
            era: Some(String::from("Era dos Titãs")),
            tipo: Some(String::from("guerra")),
            data_estimada: None,
            personagens: strings(&["Zeus", "Cronos"]),
            tags: strings(&["guerra", "titas"]),
        },
        TimelineEvent {
            id: String::from("guerra-troia"),
            nome: String::from("Guerra de Troia"),
            descricao: String::from("O cerco de dez anos à cidade de Troia."),
            era: Some(String::from("Era Heroica")),
            tipo: Some(String::from("guerra")),
            data_estimada: Some(String::from("c. 1200 a.C.")),
            personagens: strings(&["Aquiles", "Heitor", "Odisseu"]),
            tags: strings(&["guerra", "troia"]),
        },
    ]
}
