//! The immutable event list a session starts from.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::SeedError;
use crate::event::{Buzz, Category, Event, EventId, TicketLink};

/// Validated, read-only list of events. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    events: Arc<[Event]>,
}

impl Seed {
    /// Validate a custom event list.
    pub fn new(events: Vec<Event>) -> Result<Self, SeedError> {
        if events.is_empty() {
            return Err(SeedError::Empty);
        }

        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id) {
                return Err(SeedError::DuplicateId(event.id));
            }
        }

        Ok(Self {
            events: events.into(),
        })
    }

    /// The built-in mock dataset.
    pub fn builtin() -> Self {
        Self {
            events: builtin_events().into(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: EventId,
    name: &str,
    image: &str,
    category: Category,
    music_style: &str,
    distance: &str,
    status: Buzz,
    description: &str,
    address: &str,
) -> Event {
    Event {
        id,
        name: name.to_string(),
        image: image.to_string(),
        category,
        music_style: music_style.to_string(),
        distance: distance.to_string(),
        status,
        description: description.to_string(),
        address: address.to_string(),
        featured: false,
        vibe: None,
        ticket: None,
    }
}

fn builtin_events() -> Vec<Event> {
    vec![
        Event {
            featured: true,
            ..event(
                1,
                "Techno Destrói",
                "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?w=500&q=80",
                Category::Festa,
                "Techno",
                "5 km",
                Buzz::Bombando,
                "Uma noite de techno pesado com os melhores DJs da cena underground. Prepare-se para uma experiência sonora intensa e inesquecível.",
                "Rua Augusta, 123 - São Paulo, SP",
            )
        },
        event(
            2,
            "Samba do Beco",
            "https://images.unsplash.com/photo-1579482736856-c5798634c311?w=500&q=80",
            Category::Bar,
            "Samba",
            "2 km",
            Buzz::Medio,
            "Roda de samba tradicional com petiscos de boteco e cerveja gelada. O melhor clima para um happy hour animado.",
            "Vila Madalena, 45 - São Paulo, SP",
        ),
        Event {
            ticket: Some(TicketLink("#".to_string())),
            ..event(
                3,
                "Indie Sessions",
                "https://images.unsplash.com/photo-1524368535928-5b5e00ddc76b?w=500&q=80",
                Category::Show,
                "Indie Rock",
                "8 km",
                Buzz::Bombando,
                "Festival com as bandas mais quentes do cenário indie rock nacional e internacional. Garanta seu ingresso!",
                "Arena Interlagos - São Paulo, SP",
            )
        },
        Event {
            vibe: Some("Em tempo real".to_string()),
            ..event(
                4,
                "Cine-Arte na Praça",
                "https://images.unsplash.com/photo-1536440136628-849c177e76a1?w=500&q=80",
                Category::Cultural,
                "Variado",
                "3 km",
                Buzz::Fraco,
                "Exibição de filmes clássicos ao ar livre. Traga sua canga e aproveite uma noite de cinema sob as estrelas.",
                "Praça da Liberdade - Belo Horizonte, MG",
            )
        },
        event(
            5,
            "Forró do Candeeiro",
            "https://images.unsplash.com/photo-1558200234-a05c6a15714c?w=500&q=80",
            Category::Festa,
            "Forró",
            "6 km",
            Buzz::Medio,
            "Arrasta o pé a noite toda ao som do melhor do forró pé de serra. Ambiente acolhedor e gente animada.",
            "Rua dos Pinheiros, 789 - São Paulo, SP",
        ),
        event(
            6,
            "Jazz Club Noturno",
            "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=500&q=80",
            Category::Bar,
            "Jazz",
            "10 km",
            Buzz::Medio,
            "Música ao vivo de alta qualidade em um ambiente sofisticado. Perfeito para apreciar boa música e drinks.",
            "Alameda Lorena, 1500 - São Paulo, SP",
        ),
    ]
}
