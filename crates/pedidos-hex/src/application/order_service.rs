use std::str::FromStr;

use crate::errors::AppError;
use pedidos_types::domain::order::{NewOrder, Order, OrderChanges, OrderStatus};
use pedidos_types::ports::order_repository::OrderRepository;

const NOT_FOUND: &str = "Pedido não encontrado";

/// Partial update as received from the boundary; the status arrives as a raw
/// string and is validated here, not in the deserializer.
#[derive(Debug, Clone, Default)]
pub struct OrderUpdate {
    pub client: Option<String>,
    pub address: Option<String>,
    pub product: Option<String>,
    pub status: Option<String>,
}

pub struct OrderService<R: OrderRepository> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create_order(
        &self,
        client: String,
        address: String,
        product: String,
        status: &str,
    ) -> Result<Order, AppError> {
        let status =
            OrderStatus::from_str(status).map_err(|e| AppError::BadRequest(e.to_string()))?;
        let order = NewOrder::new(client, address, product, status)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        self.repo
            .insert(order)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
    }

    pub async fn get_order(&self, id: i64) -> Result<Order, AppError> {
        match self
            .repo
            .get(id)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        {
            Some(o) => Ok(o),
            None => Err(AppError::NotFound(NOT_FOUND.into())),
        }
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        self.repo
            .list()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
    }

    pub async fn update_order(&self, id: i64, update: OrderUpdate) -> Result<Order, AppError> {
        let changes = Self::validate_update(update)?;
        match self
            .repo
            .update(id, changes)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        {
            Some(o) => Ok(o),
            None => Err(AppError::NotFound(NOT_FOUND.into())),
        }
    }

    pub async fn delete_order(&self, id: i64) -> Result<(), AppError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;
        if deleted {
            Ok(())
        } else {
            Err(AppError::NotFound(NOT_FOUND.into()))
        }
    }

    fn validate_update(update: OrderUpdate) -> Result<OrderChanges, AppError> {
        for (name, value) in [
            ("cliente", &update.client),
            ("endereco", &update.address),
            ("produto", &update.product),
        ] {
            if let Some(v) = value {
                if v.trim().is_empty() {
                    return Err(AppError::BadRequest(format!("{name} vazio")));
                }
            }
        }
        let status = update
            .status
            .as_deref()
            .map(OrderStatus::from_str)
            .transpose()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok(OrderChanges {
            client: update.client,
            address: update.address,
            product: update.product,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedidos_repo::memory::InMemoryRepo;

    fn service() -> OrderService<InMemoryRepo> {
        OrderService::new(InMemoryRepo::new())
    }

    #[tokio::test]
    async fn create_and_get_round_trip() {
        let svc = service();
        let created = svc
            .create_order("Ana".into(), "Rua A, 1".into(), "Livro".into(), "A caminho")
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let got = svc.get_order(created.id).await.unwrap();
        assert_eq!(got.client, "Ana");
        assert_eq!(got.address, "Rua A, 1");
        assert_eq!(got.product, "Livro");
        assert_eq!(got.status, OrderStatus::InTransit);
    }

    #[tokio::test]
    async fn create_rejects_unknown_status_and_empty_fields() {
        let svc = service();
        let bad_status = svc
            .create_order("Ana".into(), "Rua A, 1".into(), "Livro".into(), "Pendente")
            .await;
        assert!(matches!(bad_status, Err(AppError::BadRequest(_))));

        let empty_client = svc
            .create_order("".into(), "Rua A, 1".into(), "Livro".into(), "A caminho")
            .await;
        assert!(matches!(empty_client, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn update_only_touches_supplied_fields() {
        let svc = service();
        let created = svc
            .create_order("Ana".into(), "Rua A, 1".into(), "Livro".into(), "A caminho")
            .await
            .unwrap();

        let updated = svc
            .update_order(
                created.id,
                OrderUpdate {
                    status: Some("Entregue".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Delivered);
        assert_eq!(updated.client, "Ana");
        assert_eq!(updated.address, "Rua A, 1");
        assert_eq!(updated.product, "Livro");
    }

    #[tokio::test]
    async fn update_rejects_unknown_status() {
        let svc = service();
        let created = svc
            .create_order("Ana".into(), "Rua A, 1".into(), "Livro".into(), "A caminho")
            .await
            .unwrap();
        let res = svc
            .update_order(
                created.id,
                OrderUpdate {
                    status: Some("Extraviado".into()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(res, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn not_found_paths() {
        let svc = service();
        let missing = svc.get_order(42).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let updated = svc
            .update_order(
                42,
                OrderUpdate {
                    status: Some("Entregue".into()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(updated, Err(AppError::NotFound(_))));

        let deleted = svc.delete_order(42).await;
        assert!(matches!(deleted, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_then_lookup_is_not_found() {
        let svc = service();
        let created = svc
            .create_order("Ana".into(), "Rua A, 1".into(), "Livro".into(), "A caminho")
            .await
            .unwrap();
        svc.delete_order(created.id).await.unwrap();
        let missing = svc.get_order(created.id).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
