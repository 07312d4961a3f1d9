//! Integration tests for the AddProduct command handler.
//!
//! These tests run the handler against the in-memory collaborators and
//! check both the resulting reservation and the exact collaborator calls.

use common::AggregateId;
use domain::{
    BookKeeper, Client, ClientId, DefaultTaxPolicy, Money, Product, ProductId, ProductType,
    Reservation, ReservationError, ReservationStatus,
};
use sales::{
    AddProductCommand, AddProductCommandHandler, InMemoryClientRepository,
    InMemoryProductRepository, InMemoryReservationRepository, InMemorySuggestionService,
    SalesError, SystemContext,
};

type Handler = AddProductCommandHandler<
    InMemoryReservationRepository,
    InMemoryProductRepository,
    InMemorySuggestionService,
    InMemoryClientRepository,
>;

/// Collaborators seeded with one opened reservation, an available drug
/// (`SKU-AVAIL`), an unavailable drug (`SKU-GONE`) whose equivalent is
/// `SKU-GENERIC`, and the acting client.
struct Fixture {
    reservations: InMemoryReservationRepository,
    products: InMemoryProductRepository,
    suggestions: InMemorySuggestionService,
    clients: InMemoryClientRepository,
    handler: Handler,
    client: Client,
    ctx: SystemContext,
    order_id: AggregateId,
    original: Reservation,
}

impl Fixture {
    async fn new() -> Self {
        let reservations = InMemoryReservationRepository::new();
        let products = InMemoryProductRepository::new();
        let suggestions = InMemorySuggestionService::new();
        let clients = InMemoryClientRepository::new();

        let client = Client::new(ClientId::new(), "ClientData1");
        clients.insert(client.clone()).await;

        let order_id = AggregateId::generate();
        reservations
            .insert(Reservation::open(order_id, &client))
            .await
            .unwrap();
        let original = reservations.get(order_id).await.unwrap();

        products
            .insert(Product::new(
                "SKU-AVAIL",
                "DummyName",
                Money::from_cents(100),
                ProductType::Drug,
            ))
            .await;
        products
            .insert(
                Product::new("SKU-GONE", "Brand", Money::from_cents(900), ProductType::Drug)
                    .unavailable(),
            )
            .await;
        suggestions
            .add_equivalent(
                "SKU-GONE",
                Product::new("SKU-GENERIC", "Generic", Money::from_cents(400), ProductType::Drug),
            )
            .await;

        let handler = AddProductCommandHandler::new(
            reservations.clone(),
            products.clone(),
            suggestions.clone(),
            clients.clone(),
        );

        Self {
            reservations,
            products,
            suggestions,
            clients,
            handler,
            ctx: SystemContext::for_client(client.id()),
            client,
            order_id,
            original,
        }
    }

    async fn reload(&self) -> Reservation {
        self.reservations.get(self.order_id).await.unwrap()
    }
}

mod available_product {
    use super::*;

    #[tokio::test]
    async fn loads_each_repository_once_and_saves_once() {
        let fx = Fixture::new().await;

        fx.handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-AVAIL", 1), &fx.ctx)
            .await
            .unwrap();

        assert_eq!(fx.reservations.load_count(), 1);
        assert_eq!(fx.products.load_count(), 1);
        assert_eq!(fx.reservations.save_count(), 1);
    }

    #[tokio::test]
    async fn never_consults_suggestion_service_or_clients() {
        let fx = Fixture::new().await;

        fx.handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-AVAIL", 1), &fx.ctx)
            .await
            .unwrap();

        assert_eq!(fx.suggestions.call_count().await, 0);
        assert_eq!(fx.clients.load_count(), 0);
    }

    #[tokio::test]
    async fn reload_shows_new_item_and_unchanged_header() {
        let fx = Fixture::new().await;

        fx.handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-AVAIL", 3), &fx.ctx)
            .await
            .unwrap();

        let reloaded = fx.reload().await;
        assert_eq!(reloaded.item_count(), 1);
        let item = &reloaded.items()[0];
        assert_eq!(item.product.product_id, ProductId::new("SKU-AVAIL"));
        assert_eq!(item.product.name, "DummyName");
        assert_eq!(item.product.price, Money::from_cents(100));
        assert_eq!(item.product.product_type, ProductType::Drug);
        assert_eq!(item.quantity, 3);

        assert_eq!(reloaded.client_data(), fx.original.client_data());
        assert_eq!(reloaded.status(), ReservationStatus::Opened);
        assert_eq!(reloaded.created_at(), fx.original.created_at());
        assert_eq!(reloaded.version(), fx.original.version().next());
    }

    #[tokio::test]
    async fn same_command_twice_adds_two_lines() {
        let fx = Fixture::new().await;
        let command = AddProductCommand::new(fx.order_id, "SKU-AVAIL", 2);

        fx.handler.handle(command.clone(), &fx.ctx).await.unwrap();
        fx.handler.handle(command, &fx.ctx).await.unwrap();

        let reloaded = fx.reload().await;
        assert_eq!(reloaded.item_count(), 2);
        assert!(reloaded.items().iter().all(|item| item.quantity == 2));
        assert_eq!(reloaded.total_cost(), Money::from_cents(400));
        assert_eq!(fx.reservations.save_count(), 2);
    }
}

mod unavailable_product {
    use super::*;

    #[tokio::test]
    async fn asks_suggestion_service_once_with_product_and_client() {
        let fx = Fixture::new().await;

        fx.handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-GONE", 1), &fx.ctx)
            .await
            .unwrap();

        assert_eq!(
            fx.suggestions.calls().await,
            vec![(ProductId::new("SKU-GONE"), fx.client.id())]
        );
        assert_eq!(fx.clients.load_count(), 1);
        assert_eq!(fx.reservations.load_count(), 1);
        assert_eq!(fx.products.load_count(), 1);
        assert_eq!(fx.reservations.save_count(), 1);
    }

    #[tokio::test]
    async fn adds_the_equivalent_instead_of_the_original() {
        let fx = Fixture::new().await;

        fx.handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-GONE", 4), &fx.ctx)
            .await
            .unwrap();

        let reloaded = fx.reload().await;
        assert_eq!(reloaded.item_count(), 1);
        assert!(reloaded.contains(&ProductId::new("SKU-GENERIC")));
        assert!(!reloaded.contains(&ProductId::new("SKU-GONE")));
        assert_eq!(reloaded.items()[0].quantity, 4);
    }

    #[tokio::test]
    async fn availability_is_read_at_add_time() {
        let fx = Fixture::new().await;
        let available = ProductId::new("SKU-AVAIL");

        fx.handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-AVAIL", 1), &fx.ctx)
            .await
            .unwrap();
        fx.products.set_available(&available, false).await;

        // The existing line is untouched by the catalog change.
        assert!(fx.reload().await.contains(&available));

        // A new add of the same product now goes through the suggestion path.
        let result = fx
            .handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-AVAIL", 1), &fx.ctx)
            .await;
        assert!(matches!(result, Err(SalesError::SuggestionService(_))));
        assert_eq!(fx.reload().await.item_count(), 1);
    }

    #[tokio::test]
    async fn unavailable_equivalent_is_rejected_without_saving() {
        let fx = Fixture::new().await;
        fx.suggestions
            .add_equivalent(
                "SKU-GONE",
                Product::new("SKU-ALSO-GONE", "Other", Money::from_cents(500), ProductType::Drug)
                    .unavailable(),
            )
            .await;

        let result = fx
            .handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-GONE", 1), &fx.ctx)
            .await;

        assert!(matches!(
            result,
            Err(SalesError::Reservation(ReservationError::ProductUnavailable { .. }))
        ));
        assert_eq!(fx.reservations.save_count(), 0);
    }
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn missing_reservation_is_not_found() {
        let fx = Fixture::new().await;

        let result = fx
            .handler
            .handle(
                AddProductCommand::new(AggregateId::generate(), "SKU-AVAIL", 1),
                &fx.ctx,
            )
            .await;

        assert!(matches!(
            result,
            Err(SalesError::NotFound {
                entity: "Reservation",
                ..
            })
        ));
        assert_eq!(fx.reservations.load_count(), 1);
        assert_eq!(fx.products.load_count(), 0);
        assert_eq!(fx.reservations.save_count(), 0);
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let fx = Fixture::new().await;

        let result = fx
            .handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-404", 1), &fx.ctx)
            .await;

        assert!(matches!(
            result,
            Err(SalesError::NotFound {
                entity: "Product",
                ..
            })
        ));
        assert_eq!(fx.reservations.save_count(), 0);
    }

    #[tokio::test]
    async fn missing_acting_client_is_not_found() {
        let fx = Fixture::new().await;
        let stranger = SystemContext::for_client(ClientId::new());

        let result = fx
            .handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-GONE", 1), &stranger)
            .await;

        assert!(matches!(
            result,
            Err(SalesError::NotFound { entity: "Client", .. })
        ));
        assert_eq!(fx.suggestions.call_count().await, 0);
    }

    #[tokio::test]
    async fn suggestion_failure_propagates() {
        let fx = Fixture::new().await;
        fx.suggestions.set_fail_on_suggest(true).await;

        let result = fx
            .handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-GONE", 1), &fx.ctx)
            .await;

        assert!(matches!(result, Err(SalesError::SuggestionService(_))));
        assert_eq!(fx.reservations.save_count(), 0);
        assert_eq!(fx.reload().await.item_count(), 0);
    }

    #[tokio::test]
    async fn zero_quantity_is_rejected() {
        let fx = Fixture::new().await;

        let result = fx
            .handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-AVAIL", 0), &fx.ctx)
            .await;

        assert!(matches!(
            result,
            Err(SalesError::Reservation(ReservationError::InvalidQuantity { quantity: 0 }))
        ));
        assert_eq!(fx.reservations.save_count(), 0);
    }

    #[tokio::test]
    async fn overflowing_line_cost_is_rejected_without_saving() {
        let fx = Fixture::new().await;
        fx.products
            .insert(Product::new(
                "SKU-BIG",
                "Bulk",
                Money::from_cents(5_000_000_000),
                ProductType::Standard,
            ))
            .await;

        let result = fx
            .handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-BIG", u32::MAX), &fx.ctx)
            .await;

        assert!(matches!(
            result,
            Err(SalesError::Reservation(ReservationError::AmountOverflow {
                quantity: u32::MAX,
                ..
            }))
        ));
        assert_eq!(fx.reservations.save_count(), 0);
        assert_eq!(fx.reload().await.item_count(), 0);
    }

    #[tokio::test]
    async fn confirmed_reservation_rejects_new_products() {
        let fx = Fixture::new().await;
        fx.handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-AVAIL", 1), &fx.ctx)
            .await
            .unwrap();

        let mut reservation = fx.reload().await;
        reservation.confirm().unwrap();
        fx.reservations.insert(reservation).await.unwrap();

        let result = fx
            .handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-AVAIL", 1), &fx.ctx)
            .await;

        assert!(matches!(
            result,
            Err(SalesError::Reservation(
                ReservationError::InvalidStateTransition { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn save_failure_propagates() {
        let fx = Fixture::new().await;
        fx.reservations.set_fail_on_save(true);

        let result = fx
            .handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-AVAIL", 1), &fx.ctx)
            .await;

        assert!(matches!(result, Err(SalesError::Repository(_))));
        assert_eq!(fx.reload().await.item_count(), 0);
    }

    #[tokio::test]
    async fn concurrent_adds_conflict_on_save() {
        let fx = Fixture::new().await;
        let stale = fx.reload().await;

        fx.handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-AVAIL", 1), &fx.ctx)
            .await
            .unwrap();

        let result = fx.reservations.insert(stale).await;
        assert!(matches!(result, Err(SalesError::ConcurrencyConflict { .. })));
        assert_eq!(fx.reload().await.item_count(), 1);
    }
}

mod invoicing {
    use super::*;

    #[tokio::test]
    async fn reservation_built_by_handler_can_be_invoiced() {
        let fx = Fixture::new().await;
        fx.handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-AVAIL", 2), &fx.ctx)
            .await
            .unwrap();
        fx.handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-GONE", 1), &fx.ctx)
            .await
            .unwrap();

        let reservation = fx.reload().await;
        let invoice = BookKeeper::default()
            .issuance(&reservation.invoice_request(), &DefaultTaxPolicy::default())
            .unwrap();

        assert_eq!(invoice.lines().len(), 2);
        assert_eq!(invoice.client_data(), reservation.client_data());
        // 200 + 400 net at 5%
        assert_eq!(invoice.net(), Money::from_cents(600));
        assert_eq!(invoice.total_tax(), Money::from_cents(30));
        assert!(
            invoice
                .lines()
                .iter()
                .all(|line| line.tax().description() == "5% (D)")
        );
    }

    #[tokio::test]
    async fn repricing_the_catalog_does_not_change_reserved_lines() {
        let fx = Fixture::new().await;
        fx.handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-AVAIL", 1), &fx.ctx)
            .await
            .unwrap();

        fx.products
            .insert(Product::new(
                "SKU-AVAIL",
                "DummyName",
                Money::from_cents(9_999),
                ProductType::Drug,
            ))
            .await;
        fx.handler
            .handle(AddProductCommand::new(fx.order_id, "SKU-AVAIL", 1), &fx.ctx)
            .await
            .unwrap();

        let reservation = fx.reload().await;
        let prices: Vec<Money> = reservation
            .items()
            .iter()
            .map(|item| item.product.price)
            .collect();
        assert_eq!(prices, vec![Money::from_cents(100), Money::from_cents(9_999)]);

        let invoice = BookKeeper::default()
            .issuance(&reservation.invoice_request(), &DefaultTaxPolicy::default())
            .unwrap();
        assert_eq!(invoice.lines()[0].net(), Money::from_cents(100));
        assert_eq!(invoice.net(), Money::from_cents(10_099));
    }
}
