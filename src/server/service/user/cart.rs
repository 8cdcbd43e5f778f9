use sea_orm::DatabaseConnection;

use crate::{
    model::cart::{CartItemDto, CartResponseDto},
    server::{
        data::{product::ProductRepository, user::cart::CartRepository},
        error::Error,
        service::product::product_dtos,
    },
};

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    /// Creates a new instance of [`CartService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a product to the cart, or removes it when it is already there
    ///
    /// # Arguments
    /// - `quantity` - Amount to add, defaults to 1 and must not exceed the stock
    ///
    /// # Returns
    /// - `Ok(CartResponseDto)` - Outcome message with the resulting cart
    /// - `Err(Error::BadRequest)` - Quantity below 1 or above the available stock
    /// - `Err(Error::NotFound)` - Product does not exist
    pub async fn toggle(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: Option<i32>,
    ) -> Result<CartResponseDto, Error> {
        let quantity = quantity.unwrap_or(1);
        if quantity < 1 {
            return Err(Error::BadRequest(
                "Quantity must be at least 1".to_string(),
            ));
        }

        let Some((product, _)) = ProductRepository::new(self.db).get(product_id).await? else {
            return Err(Error::NotFound("Product not found".to_string()));
        };

        if product.quantity < quantity {
            return Err(Error::BadRequest("Insufficient stock".to_string()));
        }

        let cart_repo = CartRepository::new(self.db);
        let message = match cart_repo.get(user_id, product.id).await? {
            Some(cart_item) => {
                cart_repo.remove(cart_item.id).await?;

                "Product removed from cart"
            }
            None => {
                cart_repo.add(user_id, product.id, quantity).await?;

                "Product added to cart"
            }
        };

        Ok(CartResponseDto {
            message: message.to_string(),
            cart: self.get(user_id).await?,
        })
    }

    /// Gets the user's cart in the order products were added
    pub async fn get(&self, user_id: i32) -> Result<Vec<CartItemDto>, Error> {
        let (cart_items, products): (Vec<_>, Vec<_>) = CartRepository::new(self.db)
            .get_by_user(user_id)
            .await?
            .into_iter()
            .filter_map(|(cart_item, product)| product.map(|product| (cart_item, product)))
            .unzip();

        let products = product_dtos(self.db, products).await?;

        Ok(cart_items
            .into_iter()
            .zip(products)
            .map(|(cart_item, product)| CartItemDto {
                id: cart_item.id,
                product,
                quantity: cart_item.quantity,
            })
            .collect())
    }
}
