use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{OrderItemModel, OrderModel, ProductModel},
    TestSetup,
};

impl TestSetup {
    pub fn order<'a>(&'a mut self) -> OrderFixtures<'a> {
        OrderFixtures { setup: self }
    }
}

pub struct OrderFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> OrderFixtures<'a> {
    /// Insert an order with one line per `(product, quantity)` pair.
    ///
    /// The total is derived from the product prices. Stock is left untouched.
    pub async fn insert_order(
        &self,
        buyer_id: i32,
        status: &str,
        lines: &[(&ProductModel, i32)],
    ) -> Result<(OrderModel, Vec<OrderItemModel>), TestError> {
        let now = Utc::now().naive_utc();
        let total_amount = lines
            .iter()
            .map(|(product, quantity)| product.price * f64::from(*quantity))
            .sum();

        let order = entity::prelude::LuxeOrder::insert(entity::luxe_order::ActiveModel {
            buyer_id: ActiveValue::Set(Some(buyer_id)),
            total_amount: ActiveValue::Set(total_amount),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?;

        let mut items = Vec::with_capacity(lines.len());
        for (product, quantity) in lines {
            let item =
                entity::prelude::LuxeOrderItem::insert(entity::luxe_order_item::ActiveModel {
                    order_id: ActiveValue::Set(order.id),
                    product_id: ActiveValue::Set(Some(product.id)),
                    name: ActiveValue::Set(product.name.clone()),
                    price: ActiveValue::Set(product.price),
                    quantity: ActiveValue::Set(*quantity),
                    ..Default::default()
                })
                .exec_with_returning(&self.setup.state.db)
                .await?;

            items.push(item);
        }

        Ok((order, items))
    }
}
