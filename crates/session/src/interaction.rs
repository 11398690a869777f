use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use musee_core::{Aggregate, AggregateRoot, DomainError, ItemId, SessionId};
use musee_events::{Event, Notice, Notify};

/// Aggregate root: what one visitor did during their visit.
///
/// Created empty when the session starts and dropped with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionState {
    session_id: SessionId,
    liked: BTreeSet<ItemId>,
    wishlist: BTreeSet<ItemId>,
    registered: BTreeSet<ItemId>,
    /// Quantities are always >= 1; an entry reaching 0 is removed.
    cart: BTreeMap<ItemId, u32>,
    #[serde(skip)]
    version: u64,
}

impl InteractionState {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            liked: BTreeSet::new(),
            wishlist: BTreeSet::new(),
            registered: BTreeSet::new(),
            cart: BTreeMap::new(),
            version: 0,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn is_liked(&self, id: ItemId) -> bool {
        self.liked.contains(&id)
    }

    pub fn is_wishlisted(&self, id: ItemId) -> bool {
        self.wishlist.contains(&id)
    }

    pub fn is_registered(&self, id: ItemId) -> bool {
        self.registered.contains(&id)
    }

    pub fn liked(&self) -> &BTreeSet<ItemId> {
        &self.liked
    }

    pub fn wishlist(&self) -> &BTreeSet<ItemId> {
        &self.wishlist
    }

    pub fn registered(&self) -> &BTreeSet<ItemId> {
        &self.registered
    }

    pub fn cart(&self) -> &BTreeMap<ItemId, u32> {
        &self.cart
    }

    pub fn quantity(&self, id: ItemId) -> u32 {
        self.cart.get(&id).copied().unwrap_or(0)
    }
}

impl AggregateRoot for InteractionState {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.session_id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionCommand {
    ToggleLike(ItemId),
    ToggleWishlist(ItemId),
    ToggleRegistration(ItemId),
    AddToCart(ItemId),
    RemoveFromCart(ItemId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionEvent {
    Liked(ItemId),
    Unliked(ItemId),
    Wishlisted(ItemId),
    Unwishlisted(ItemId),
    Registered(ItemId),
    RegistrationCancelled(ItemId),
    /// `quantity` is the new quantity of the line.
    CartItemAdded { item_id: ItemId, quantity: u32 },
    /// `quantity` is what remains; 0 means the line is gone.
    CartItemRemoved { item_id: ItemId, quantity: u32 },
}

impl Event for InteractionEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InteractionEvent::Liked(_) => "session.artwork.liked",
            InteractionEvent::Unliked(_) => "session.artwork.unliked",
            InteractionEvent::Wishlisted(_) => "session.wishlist.added",
            InteractionEvent::Unwishlisted(_) => "session.wishlist.removed",
            InteractionEvent::Registered(_) => "session.event.registered",
            InteractionEvent::RegistrationCancelled(_) => "session.event.registration_cancelled",
            InteractionEvent::CartItemAdded { .. } => "session.cart.item_added",
            InteractionEvent::CartItemRemoved { .. } => "session.cart.item_removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Notify for InteractionEvent {
    // Removing a like, a wishlist entry or a cart unit is silent; cancelling a
    // registration is announced.
    fn notice(&self) -> Option<Notice> {
        match self {
            InteractionEvent::Liked(_) => Some(Notice::info("Œuvre ajoutée aux favoris")),
            InteractionEvent::Wishlisted(_) => Some(Notice::info("Ajouté à la liste de souhaits")),
            InteractionEvent::Registered(_) => Some(
                Notice::info("Inscription confirmée !")
                    .with_description("Vous recevrez un email de confirmation"),
            ),
            InteractionEvent::RegistrationCancelled(_) => Some(Notice::info("Inscription annulée")),
            InteractionEvent::CartItemAdded { .. } => Some(Notice::info("Ajouté au panier")),
            InteractionEvent::Unliked(_)
            | InteractionEvent::Unwishlisted(_)
            | InteractionEvent::CartItemRemoved { .. } => None,
        }
    }
}

/// Page a like was given from. Each page words its notice differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeSurface {
    #[default]
    Collection,
    Home,
    Detail,
}

impl LikeSurface {
    /// Notice for a like toggle that left the artwork `liked` (or not).
    pub fn notice(self, liked: bool) -> Option<Notice> {
        match (self, liked) {
            (LikeSurface::Detail, true) => Some(Notice::info("Ajouté aux favoris")),
            (LikeSurface::Detail, false) => Some(Notice::info("Retiré des favoris")),
            (LikeSurface::Home, true) => Some(
                Notice::info("Œuvre ajoutée aux favoris")
                    .with_description("Vous pouvez retrouver vos œuvres favorites dans votre profil."),
            ),
            (LikeSurface::Collection, true) => Some(Notice::info("Œuvre ajoutée aux favoris")),
            (LikeSurface::Home | LikeSurface::Collection, false) => None,
        }
    }
}

impl core::str::FromStr for LikeSurface {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collection" => Ok(LikeSurface::Collection),
            "home" => Ok(LikeSurface::Home),
            "detail" => Ok(LikeSurface::Detail),
            other => Err(DomainError::validation(format!("unknown like surface '{other}'"))),
        }
    }
}

impl Aggregate for InteractionState {
    type Command = InteractionCommand;
    type Event = InteractionEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match *event {
            InteractionEvent::Liked(id) => {
                self.liked.insert(id);
            }
            InteractionEvent::Unliked(id) => {
                self.liked.remove(&id);
            }
            InteractionEvent::Wishlisted(id) => {
                self.wishlist.insert(id);
            }
            InteractionEvent::Unwishlisted(id) => {
                self.wishlist.remove(&id);
            }
            InteractionEvent::Registered(id) => {
                self.registered.insert(id);
            }
            InteractionEvent::RegistrationCancelled(id) => {
                self.registered.remove(&id);
            }
            InteractionEvent::CartItemAdded { item_id, quantity }
            | InteractionEvent::CartItemRemoved { item_id, quantity } => {
                if quantity == 0 {
                    self.cart.remove(&item_id);
                } else {
                    self.cart.insert(item_id, quantity);
                }
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let event = match *command {
            InteractionCommand::ToggleLike(id) => {
                if self.is_liked(id) {
                    InteractionEvent::Unliked(id)
                } else {
                    InteractionEvent::Liked(id)
                }
            }
            InteractionCommand::ToggleWishlist(id) => {
                if self.is_wishlisted(id) {
                    InteractionEvent::Unwishlisted(id)
                } else {
                    InteractionEvent::Wishlisted(id)
                }
            }
            InteractionCommand::ToggleRegistration(id) => {
                if self.is_registered(id) {
                    InteractionEvent::RegistrationCancelled(id)
                } else {
                    InteractionEvent::Registered(id)
                }
            }
            InteractionCommand::AddToCart(id) => InteractionEvent::CartItemAdded {
                item_id: id,
                quantity: self.quantity(id).saturating_add(1),
            },
            InteractionCommand::RemoveFromCart(id) => match self.cart.get(&id) {
                // Nothing to remove.
                None => return Ok(vec![]),
                Some(&qty) => InteractionEvent::CartItemRemoved {
                    item_id: id,
                    quantity: qty - 1,
                },
            },
        };
        Ok(vec![event])
    }
}

impl InteractionState {
    /// Run a command that cannot fail and return the emitted events.
    fn run(&mut self, command: InteractionCommand) -> Vec<InteractionEvent> {
        // `handle` has no failing branch for interaction commands.
        self.execute(&command).unwrap_or_default()
    }
}

/// Flip the like on `id`; returns the new state and whether the artwork is now liked.
pub fn toggle_like(mut state: InteractionState, id: ItemId) -> (InteractionState, bool) {
    state.run(InteractionCommand::ToggleLike(id));
    let liked = state.is_liked(id);
    (state, liked)
}

/// Flip the wishlist membership of `id`; returns the new state and whether it was added.
pub fn toggle_wishlist(mut state: InteractionState, id: ItemId) -> (InteractionState, bool) {
    state.run(InteractionCommand::ToggleWishlist(id));
    let added = state.is_wishlisted(id);
    (state, added)
}

/// Flip the registration to event `id`; returns the new state and whether the
/// visitor is now registered.
pub fn toggle_registration(mut state: InteractionState, id: ItemId) -> (InteractionState, bool) {
    state.run(InteractionCommand::ToggleRegistration(id));
    let registered = state.is_registered(id);
    (state, registered)
}

/// Add one unit of `id` to the cart.
pub fn add_to_cart(mut state: InteractionState, id: ItemId) -> InteractionState {
    state.run(InteractionCommand::AddToCart(id));
    state
}

/// Remove one unit of `id` from the cart; absent ids are left alone.
pub fn remove_from_cart(mut state: InteractionState, id: ItemId) -> InteractionState {
    state.run(InteractionCommand::RemoveFromCart(id));
    state
}
