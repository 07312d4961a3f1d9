//! Reservation command handlers.

use crate::command::AddProductCommand;
use crate::context::SystemContext;
use crate::error::Result;
use crate::repository::{ClientRepository, ProductRepository, ReservationRepository};
use crate::suggestion::SuggestionService;

/// Handles [`AddProductCommand`].
///
/// Each call performs one reservation load, one product load and, when the
/// reservation accepts the product, one save. Only when the requested
/// product is unavailable does the handler look up the acting client and
/// ask the suggestion service for an equivalent. Collaborator errors are
/// propagated untouched; nothing is saved unless every step succeeded.
pub struct AddProductCommandHandler<R, P, S, C>
where
    R: ReservationRepository,
    P: ProductRepository,
    S: SuggestionService,
    C: ClientRepository,
{
    reservations: R,
    products: P,
    suggestions: S,
    clients: C,
}

impl<R, P, S, C> AddProductCommandHandler<R, P, S, C>
where
    R: ReservationRepository,
    P: ProductRepository,
    S: SuggestionService,
    C: ClientRepository,
{
    /// Creates a new handler over the given collaborators.
    pub fn new(reservations: R, products: P, suggestions: S, clients: C) -> Self {
        Self {
            reservations,
            products,
            suggestions,
            clients,
        }
    }

    /// Adds the requested product, or its suggested equivalent, to the
    /// reservation and saves it.
    #[tracing::instrument(
        skip(self, command, ctx),
        fields(
            order_id = %command.order_id,
            product_id = %command.product_id,
            quantity = command.quantity
        )
    )]
    pub async fn handle(&self, command: AddProductCommand, ctx: &SystemContext) -> Result<()> {
        metrics::counter!("sales_add_product_total").increment(1);

        let mut reservation = self.reservations.load(command.order_id).await?;
        let mut product = self.products.load(&command.product_id).await?;

        if !product.is_available() {
            let client = self.clients.load(ctx.system_user().client_id()).await?;
            let equivalent = self.suggestions.suggest_equivalent(&product, &client).await?;

            tracing::info!(
                requested = %product.id(),
                substitute = %equivalent.id(),
                "product unavailable, substituting equivalent"
            );
            metrics::counter!("sales_product_substitutions_total").increment(1);
            product = equivalent;
        }

        reservation.add(&product, command.quantity)?;
        self.reservations.save(reservation).await?;

        tracing::debug!(added = %product.id(), "reservation saved");
        Ok(())
    }
}
