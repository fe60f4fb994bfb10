//! In-memory `CatalogStore` used by service tests.
//!
//! Each transaction works on a private copy of the state that is written back on commit,
//! so a dropped transaction leaves the shared state untouched.

use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex, MutexGuard,
    },
};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;

use crate::server::{
    data::game::{CatalogStore, GameStore, StoreTransaction},
    model::{
        game::{Game, GameFields, GameWithRelations, NewGame},
        reference::{Reference, ReferenceKind},
    },
};

#[derive(Debug, Clone, Default)]
pub struct FakeState {
    next_id: i32,
    pub games: BTreeMap<i32, Game>,
    pub references: HashMap<ReferenceKind, Vec<Reference>>,
    pub associations: HashMap<(i32, ReferenceKind), Vec<i32>>,
}

impl FakeState {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn related(&self, game_id: i32, kind: ReferenceKind) -> Vec<Reference> {
        let ids = self
            .associations
            .get(&(game_id, kind))
            .cloned()
            .unwrap_or_default();
        let mut related: Vec<Reference> = self
            .references
            .get(&kind)
            .map(|refs| refs.iter().filter(|r| ids.contains(&r.id)).cloned().collect())
            .unwrap_or_default();
        related.sort_by(|a, b| a.name.cmp(&b.name));
        related
    }
}

#[derive(Clone, Default)]
pub struct FakeCatalog {
    state: Arc<Mutex<FakeState>>,
    begins: Arc<AtomicUsize>,
    fail_set_associations: bool,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every `set_associations` call fail, to exercise rollback.
    pub fn failing_associations(mut self) -> Self {
        self.fail_set_associations = true;
        self
    }

    pub fn add_reference(&self, kind: ReferenceKind, name: &str) -> Reference {
        let mut state = self.state();
        let reference = Reference {
            id: state.next_id(),
            name: name.to_string(),
        };
        state
            .references
            .entry(kind)
            .or_default()
            .push(reference.clone());
        reference
    }

    pub fn add_game(&self, name: &str) -> Game {
        let mut state = self.state();
        let now = Utc::now();
        let game = Game {
            id: state.next_id(),
            name: name.to_string(),
            description: None,
            price: None,
            release_date: None,
            image_url: None,
            stock: None,
            created_at: now,
            updated_at: now,
        };
        state.games.insert(game.id, game.clone());
        game
    }

    pub fn link(&self, game_id: i32, kind: ReferenceKind, reference_id: i32) {
        self.state()
            .associations
            .entry((game_id, kind))
            .or_default()
            .push(reference_id);
    }

    /// Names currently associated with the game, sorted.
    pub fn related_names(&self, game_id: i32, kind: ReferenceKind) -> Vec<String> {
        self.state()
            .related(game_id, kind)
            .into_iter()
            .map(|r| r.name)
            .collect()
    }

    pub fn game_count(&self) -> usize {
        self.state().games.len()
    }

    pub fn game(&self, id: i32) -> Option<Game> {
        self.state().games.get(&id).cloned()
    }

    /// Number of transactions opened so far.
    pub fn begin_count(&self) -> usize {
        self.begins.load(Ordering::SeqCst)
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl CatalogStore for FakeCatalog {
    type Transaction = FakeTransaction;

    async fn begin(&self) -> Result<Self::Transaction, DbErr> {
        self.begins.fetch_add(1, Ordering::SeqCst);
        Ok(FakeTransaction {
            working: Mutex::new(self.state().clone()),
            shared: self.state.clone(),
            fail_set_associations: self.fail_set_associations,
        })
    }
}

pub struct FakeTransaction {
    working: Mutex<FakeState>,
    shared: Arc<Mutex<FakeState>>,
    fail_set_associations: bool,
}

impl FakeTransaction {
    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.working.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl GameStore for FakeTransaction {
    async fn find_references(
        &self,
        kind: ReferenceKind,
        names: &[String],
    ) -> Result<Vec<Reference>, DbErr> {
        Ok(self
            .state()
            .references
            .get(&kind)
            .map(|refs| {
                refs.iter()
                    .filter(|r| names.contains(&r.name))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Game>, DbErr> {
        Ok(self
            .state()
            .games
            .values()
            .find(|g| g.name == name)
            .cloned())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        Ok(self.state().games.get(&id).cloned())
    }

    async fn insert(&self, game: NewGame) -> Result<Game, DbErr> {
        let mut state = self.state();
        if state.games.values().any(|g| g.name == game.name) {
            return Err(DbErr::Custom(format!("duplicate game name {}", game.name)));
        }

        let now = Utc::now();
        let game = Game {
            id: state.next_id(),
            name: game.name,
            description: game.fields.description,
            price: game.fields.price,
            release_date: game.fields.release_date,
            image_url: game.fields.image_url,
            stock: game.fields.stock,
            created_at: now,
            updated_at: now,
        };
        state.games.insert(game.id, game.clone());

        Ok(game)
    }

    async fn update(
        &self,
        id: i32,
        name: Option<String>,
        fields: GameFields,
    ) -> Result<Option<Game>, DbErr> {
        let mut state = self.state();
        let Some(game) = state.games.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = name {
            game.name = name;
        }
        if fields.description.is_some() {
            game.description = fields.description;
        }
        if fields.price.is_some() {
            game.price = fields.price;
        }
        if fields.release_date.is_some() {
            game.release_date = fields.release_date;
        }
        if fields.image_url.is_some() {
            game.image_url = fields.image_url;
        }
        if fields.stock.is_some() {
            game.stock = fields.stock;
        }
        game.updated_at = Utc::now();

        Ok(Some(game.clone()))
    }

    async fn set_associations(
        &self,
        game_id: i32,
        kind: ReferenceKind,
        reference_ids: &[i32],
    ) -> Result<(), DbErr> {
        if self.fail_set_associations {
            return Err(DbErr::Custom("association write failed".to_string()));
        }

        let mut ids = reference_ids.to_vec();
        ids.dedup();
        self.state().associations.insert((game_id, kind), ids);

        Ok(())
    }

    async fn load_relations(&self, game: Game) -> Result<GameWithRelations, DbErr> {
        let state = self.state();

        Ok(GameWithRelations {
            genres: state.related(game.id, ReferenceKind::Genre),
            developers: state.related(game.id, ReferenceKind::Developer),
            platforms: state.related(game.id, ReferenceKind::Platform),
            tags: state.related(game.id, ReferenceKind::Tag),
            game,
        })
    }

    async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let mut state = self.state();
        state.associations.retain(|(game_id, _), _| *game_id != id);

        Ok(state.games.remove(&id).map_or(0, |_| 1))
    }
}

#[async_trait]
impl StoreTransaction for FakeTransaction {
    async fn commit(self) -> Result<(), DbErr> {
        let working = self.working.into_inner().unwrap_or_else(|e| e.into_inner());
        *self.shared.lock().unwrap_or_else(|e| e.into_inner()) = working;

        Ok(())
    }
}
