//! Static wellness-content catalog.
//!
//! Loaded once at startup and passed by reference; ids are unique and
//! stable since the navigation layer uses them as detail-view keys.
//! Audio items expose only metadata (locator, duration) — playback is
//! owned by an external collaborator.

use serde::{Deserialize, Serialize};

use amparo_core::Mood;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Audio,
    Text,
    Podcast,
}

impl ContentKind {
    /// Display glyph name for the UI layer.
    pub fn icon(&self) -> &'static str {
        match self {
            ContentKind::Audio => "headphones",
            ContentKind::Text => "book-open-variant",
            ContentKind::Podcast => "podcast",
        }
    }
}

/// One wellness item: a breathing audio, an article or a podcast episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessContent {
    pub id: String,
    pub kind: ContentKind,
    pub title: String,
    pub category: String,
    pub duration: Option<String>,
    pub body: Option<String>,
    pub audio_url: Option<String>,
    /// Mood labels this item is recommended for.
    pub related_moods: Vec<String>,
}

/// Immutable content catalog with id lookup and mood-based filtering.
pub struct Catalog {
    items: Vec<WellnessContent>,
}

impl Catalog {
    pub fn new(items: Vec<WellnessContent>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "catalog ids must be unique"
        );
        Self { items }
    }

    pub fn items(&self) -> &[WellnessContent] {
        &self.items
    }

    /// Resolve a content id to its full record (navigation boundary).
    pub fn get(&self, id: &str) -> Option<&WellnessContent> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items associated with the given mood label, in catalog order.
    /// Empty when nothing matches — never an error.
    pub fn recommend(&self, mood_label: &str) -> Vec<&WellnessContent> {
        self.items
            .iter()
            .filter(|item| item.related_moods.iter().any(|m| m == mood_label))
            .collect()
    }

    /// Convenience overload for a canonical mood.
    pub fn recommend_for(&self, mood: Mood) -> Vec<&WellnessContent> {
        self.recommend(mood.label())
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        fn item(
            id: &str,
            kind: ContentKind,
            title: &str,
            category: &str,
            duration: Option<&str>,
            body: Option<&str>,
            audio_url: Option<&str>,
            related_moods: &[&str],
        ) -> WellnessContent {
            WellnessContent {
                id: id.to_string(),
                kind,
                title: title.to_string(),
                category: category.to_string(),
                duration: duration.map(str::to_string),
                body: body.map(str::to_string),
                audio_url: audio_url.map(str::to_string),
                related_moods: related_moods.iter().map(|s| s.to_string()).collect(),
            }
        }

        Self::new(vec![
            item(
                "1",
                ContentKind::Audio,
                "Respiração Diafragmática",
                "Respiração",
                Some("3 min"),
                Some("Sente-se confortavelmente. Coloque uma mão no peito e a outra na barriga. Respire fundo pelo nariz, sentindo sua barriga se expandir. Solte o ar lentamente pela boca. Repita por 3 minutos."),
                Some("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3"),
                &["Triste", "Irritado", "Relaxado"],
            ),
            item(
                "2",
                ContentKind::Audio,
                "Meditação para Foco",
                "Meditação",
                Some("5 min"),
                Some("Encontre uma posição confortável. Feche os olhos e concentre-se na sua respiração. Observe o ar entrando e saindo. Se sua mente divagar, gentilmente traga o foco de volta para a respiração."),
                Some("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3"),
                &["Irritado", "Neutro"],
            ),
            item(
                "3",
                ContentKind::Text,
                "Entendendo a Ansiedade",
                "Ansiedade",
                None,
                Some("A ansiedade é uma resposta natural do corpo ao estresse. É um sentimento de medo ou apreensão sobre o que está por vir. A ansiedade pode ser benéfica em algumas situações, como alertá-lo para o perigo. No entanto, quando os sentimentos de ansiedade são extremos, duram mais de seis meses e interferem na sua vida, você pode ter um transtorno de ansiedade."),
                None,
                &["Triste", "Irritado"],
            ),
            item(
                "4",
                ContentKind::Podcast,
                "Pílula de Calma #1",
                "Relaxamento",
                Some("2 min"),
                Some("Nesta primeira pílula de calma, vamos explorar uma técnica simples para acalmar a mente em momentos de estresse. Apenas respire."),
                Some("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3"),
                &["Triste", "Irritado", "Relaxado"],
            ),
            item(
                "5",
                ContentKind::Text,
                "Construindo sua Autoestima",
                "Autoestima",
                None,
                Some("Autoestima é a sua opinião geral sobre si mesmo. Quando você tem uma autoestima saudável, você se sente bem consigo mesmo e se vê como merecedor do respeito dos outros. Quando você tem baixa autoestima, você coloca pouco valor em suas opiniões e ideias. Você pode se preocupar constantemente que não é bom o suficiente."),
                None,
                &["Triste"],
            ),
            item(
                "6",
                ContentKind::Audio,
                "Relaxamento Progressivo",
                "Relaxamento",
                Some("7 min"),
                Some("Esta técnica envolve tensionar e relaxar diferentes grupos musculares do corpo. Deite-se confortavelmente e siga as instruções para relaxar da cabeça aos pés."),
                Some("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-4.mp3"),
                &["Irritado", "Relaxado"],
            ),
            item(
                "7",
                ContentKind::Text,
                "Dicas para Manter o Foco",
                "Foco",
                None,
                Some("1. Elimine distrações: Desligue notificações e encontre um lugar tranquilo.\n2. Técnica Pomodoro: Trabalhe por 25 minutos e faça uma pausa de 5 minutos.\n3. Defina metas claras: Saiba exatamente o que você quer alcançar.\n4. Faça uma coisa de cada vez: Evite multitarefas."),
                None,
                &["Neutro"],
            ),
            item(
                "8",
                ContentKind::Text,
                "Praticando a Gratidão",
                "Bem-estar",
                None,
                Some("A gratidão é uma emoção poderosa que pode melhorar seu humor e bem-estar geral. Tente pensar em três coisas pelas quais você é grato hoje. Pode ser algo grande ou pequeno. Anote-as ou apenas reflita sobre elas por um momento."),
                None,
                &["Feliz", "Neutro"],
            ),
        ])
    }
}
