use cafeteria::clients::{ClassClient, OrderClient, OrderRequest};
use cafeteria::cart::Cart;
use cafeteria::model::{
    ClassId, ClassRoom, MenuItem, MenuItemId, OrderStatus, PaymentMethod, RoomCode, Session,
    StudentId,
};
use cafeteria::order_actor::OrderError;
use cafeteria::validation::ValidationError;
use docstore::mock::MockCollection;
use docstore::CollectionHandle;

fn pizza() -> MenuItem {
    MenuItem {
        id: MenuItemId(1),
        name: "Pizza".to_string(),
        price: 50.0,
        description: "Classic Margherita Pizza".to_string(),
        allergens: vec!["gluten".to_string()],
        prep_time: 20,
        image: None,
    }
}

fn request(class_name: &str) -> OrderRequest {
    OrderRequest {
        class_name: Some(class_name.to_string()),
        payment_method: Some(PaymentMethod::Credit),
        student: None,
    }
}

fn student() -> Session {
    Session::student(StudentId::new("S001"))
}

/// Real order actor with a mocked class collection.
/// The room lookup in `on_create` is answered by the mock.
#[tokio::test]
async fn test_order_actor_copies_room_from_class() {
    let class_mock = MockCollection::<ClassRoom>::new();
    class_mock.expect_find().return_ok(vec![ClassRoom {
        id: ClassId(1),
        name: "Class B".to_string(),
        room: "A-1-102".parse::<RoomCode>().unwrap(),
    }]);
    let class_client = ClassClient::new(class_mock.client());

    let (order_actor, order_client) = cafeteria::order_actor::new(10);
    let order_client = OrderClient::new(order_client);
    let actor_handle = tokio::spawn(order_actor.run(class_client));

    let mut cart = Cart::new();
    cart.add_item(&pizza());
    cart.add_item(&pizza());
    let id = order_client
        .place_order(&student(), &request("Class B"), &mut cart)
        .await
        .expect("order should be placed");

    let order = order_client.get(id).await.unwrap().expect("order stored");
    assert_eq!(order.room.map(|r| r.to_string()), Some("A-1-102".to_string()));
    assert_eq!(order.status, OrderStatus::Preparing);
    assert_eq!(order.total_price, 100.0);
    assert_eq!(order.student_id, StudentId::new("S001"));
    assert!(cart.is_empty());

    class_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_class_leaves_room_empty() {
    let class_mock = MockCollection::<ClassRoom>::new();
    class_mock.expect_find().return_ok(vec![]);

    let (order_actor, order_client) = cafeteria::order_actor::new(10);
    let order_client = OrderClient::new(order_client);
    let actor_handle = tokio::spawn(order_actor.run(ClassClient::new(class_mock.client())));

    let mut cart = Cart::new();
    cart.add_item(&pizza());
    let id = order_client
        .place_order(&student(), &request("Chemistry Lab"), &mut cart)
        .await
        .unwrap();

    let order = order_client.get(id).await.unwrap().unwrap();
    assert_eq!(order.class_name, "Chemistry Lab");
    assert!(order.room.is_none());
    class_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

/// An empty cart is refused by the client, so neither collection is touched.
#[tokio::test]
async fn test_empty_cart_never_reaches_the_store() {
    let class_mock = MockCollection::<ClassRoom>::new();

    let (order_actor, order_client) = cafeteria::order_actor::new(10);
    let order_client = OrderClient::new(order_client);
    let actor_handle = tokio::spawn(order_actor.run(ClassClient::new(class_mock.client())));

    let mut cart = Cart::new();
    let result = order_client
        .place_order(&student(), &request("Class A"), &mut cart)
        .await;

    assert_eq!(result, Err(OrderError::Validation(ValidationError::EmptyCart)));
    assert!(order_client.list().await.unwrap().is_empty());
    assert_eq!(class_mock.requests_seen(), 0);

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_advance_stops_at_delivered() {
    let class_mock = MockCollection::<ClassRoom>::new();
    class_mock.expect_find().return_ok(vec![]);

    let (order_actor, order_client) = cafeteria::order_actor::new(10);
    let order_client = OrderClient::new(order_client);
    let actor_handle = tokio::spawn(order_actor.run(ClassClient::new(class_mock.client())));

    let mut cart = Cart::new();
    cart.add_item(&pizza());
    let id = order_client
        .place_order(&student(), &request("Class A"), &mut cart)
        .await
        .unwrap();

    let staff = Session::staff();
    assert_eq!(order_client.advance(&staff, id).await, Ok(OrderStatus::OnTheWay));
    assert_eq!(order_client.advance(&staff, id).await, Ok(OrderStatus::Delivered));

    let result = order_client.advance(&staff, id).await;
    assert_eq!(result, Err(OrderError::AlreadyDelivered(id.to_string())));

    // The failed action did not touch the stored order
    let order = order_client.get(id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);

    // A direct status change may still move it back
    let order = order_client
        .set_status(&staff, id, OrderStatus::Preparing)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Preparing);
    assert_eq!(order_client.active_orders().await.unwrap().len(), 1);

    drop(order_client);
    actor_handle.await.unwrap();
}
