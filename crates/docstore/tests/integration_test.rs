use async_trait::async_trait;
use docstore::{CollectionActor, Document, StoreError};

// --- Test Document ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    owner: String,
    seats: u32,
    closed: bool,
}

#[derive(Debug)]
struct TicketCreate {
    owner: String,
    seats: u32,
}

#[derive(Debug, Default)]
struct TicketUpdate {
    owner: Option<String>,
    seats: Option<u32>,
}

#[derive(Debug)]
enum TicketFilter {
    Owner(String),
    Open,
}

#[derive(Debug)]
enum TicketAction {
    Close,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum TicketError {
    #[error("a ticket needs at least one seat")]
    NoSeats,
    #[error("ticket already closed")]
    AlreadyClosed,
}

#[async_trait]
impl Document for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Filter = TicketFilter;
    type Action = TicketAction;
    type ActionResult = bool;
    type Context = ();
    type Error = TicketError;
    const COLLECTION: &'static str = "tickets";

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        if params.seats == 0 {
            return Err(TicketError::NoSeats);
        }
        Ok(Self {
            id,
            owner: params.owner,
            seats: params.seats,
            closed: false,
        })
    }

    fn matches(&self, filter: &TicketFilter) -> bool {
        match filter {
            TicketFilter::Owner(owner) => &self.owner == owner,
            TicketFilter::Open => !self.closed,
        }
    }

    async fn on_update(&mut self, update: TicketUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(owner) = update.owner {
            self.owner = owner;
        }
        if let Some(seats) = update.seats {
            if seats == 0 {
                return Err(TicketError::NoSeats);
            }
            self.seats = seats;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: TicketAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            TicketAction::Close => {
                if self.closed {
                    return Err(TicketError::AlreadyClosed);
                }
                self.closed = true;
                Ok(true)
            }
        }
    }
}

fn ticket(owner: &str, seats: u32) -> TicketCreate {
    TicketCreate {
        owner: owner.to_string(),
        seats,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_collection_full_lifecycle() {
    let (actor, client) = CollectionActor::<Ticket>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Add
    let first = client.add(ticket("Dana", 2)).await.unwrap();
    let second = client.add(ticket("Omer", 1)).await.unwrap();
    assert_eq!(first, 1);
    assert_eq!(second, 2);

    // 2. Update
    let updated = client
        .update(
            first,
            TicketUpdate {
                seats: Some(4),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.seats, 4);
    assert_eq!(updated.owner, "Dana");

    // 3. Action
    assert!(client.perform_action(second, TicketAction::Close).await.unwrap());

    // 4. Find
    let open = client.find(TicketFilter::Open).await.unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, first);

    // 5. Delete
    client.delete(first).await.unwrap();
    assert!(client.get(first).await.unwrap().is_none());
    assert_eq!(client.list().await.unwrap().len(), 1);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_list_and_find_keep_insertion_order() {
    let (actor, client) = CollectionActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    for owner in ["Noa", "Ari", "Noa", "Lior", "Noa"] {
        client.add(ticket(owner, 1)).await.unwrap();
    }

    let ids: Vec<u32> = client.list().await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let noa: Vec<u32> = client
        .find(TicketFilter::Owner("Noa".to_string()))
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(noa, vec![1, 3, 5]);
}

#[tokio::test]
async fn test_failed_hooks_leave_document_unchanged() {
    let (actor, client) = CollectionActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.add(ticket("Maya", 3)).await.unwrap();

    // The owner change is discarded together with the rejected seat count.
    let err = client
        .update(
            id,
            TicketUpdate {
                owner: Some("Someone".to_string()),
                seats: Some(0),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.downcast::<TicketError>().unwrap(), TicketError::NoSeats);

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.owner, "Maya");
    assert_eq!(stored.seats, 3);

    client.perform_action(id, TicketAction::Close).await.unwrap();
    let err = client
        .perform_action(id, TicketAction::Close)
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast::<TicketError>().unwrap(),
        TicketError::AlreadyClosed
    );
}

#[tokio::test]
async fn test_rejected_add_does_not_store() {
    let (actor, client) = CollectionActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.add(ticket("Yael", 0)).await.unwrap_err();
    assert_eq!(err.downcast::<TicketError>().unwrap(), TicketError::NoSeats);
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_document_reports_not_found() {
    let (actor, client) = CollectionActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    assert!(client.get(42).await.unwrap().is_none());
    assert!(matches!(
        client.delete(42).await,
        Err(StoreError::NotFound(id)) if id == "42"
    ));
    assert!(matches!(
        client.update(42, TicketUpdate::default()).await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_closed_collection_reports_actor_closed() {
    let (actor, client) = CollectionActor::<Ticket>::new(10);
    drop(actor);

    assert!(matches!(client.list().await, Err(StoreError::ActorClosed)));
}
