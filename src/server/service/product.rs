use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        notification::NotificationKind,
        product::{CreateProductDto, ProductCategory, ProductDto, UpdateProductDto},
    },
    server::{
        data::{
            notification::{NewNotification, NotificationRepository},
            product::{NewProduct, ProductChanges, ProductRepository},
            user::{cart::CartRepository, UserRepository},
        },
        error::Error,
    },
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    /// Creates a new instance of [`ProductService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a new product for `seller_id` and notifies the seller
    ///
    /// # Returns
    /// - `Ok(ProductDto)` - The listed product
    /// - `Err(Error::BadRequest)` - Image missing, unknown category or invalid name, price or
    ///   quantity
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        seller_id: i32,
        dto: CreateProductDto,
    ) -> Result<ProductDto, Error> {
        let image = dto
            .image
            .filter(|image| !image.trim().is_empty())
            .ok_or_else(|| Error::BadRequest("Product image is required".to_string()))?;
        let category = parse_category(dto.category.as_deref().unwrap_or_default())?;
        let name = dto
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::BadRequest("Product name is required".to_string()))?;
        let price = validate_price(dto.price)?;
        let quantity = validate_quantity(dto.quantity)?;

        let txn = self.db.begin().await?;

        let product = ProductRepository::new(&txn)
            .create(
                seller_id,
                NewProduct {
                    name,
                    price,
                    quantity,
                    description: dto.description,
                    category: category.as_str().to_string(),
                    image,
                },
            )
            .await?;

        NotificationRepository::new(&txn)
            .create(
                NewNotification::new(
                    seller_id,
                    NotificationKind::Product,
                    format!("Your product \"{}\" has been listed successfully.", product.name),
                )
                .product(product.id)
                .action("create"),
            )
            .await?;

        let seller = UserRepository::new(&txn).get(seller_id).await?.ok_or_else(|| {
            Error::InternalError(format!("Seller ID {} of new product not found", seller_id))
        })?;

        txn.commit().await?;

        Ok(ProductDto::new(product, &seller)?)
    }

    /// Gets every product, newest first
    pub async fn get_all(&self) -> Result<Vec<ProductDto>, Error> {
        let products = ProductRepository::new(self.db).get_all().await?;

        products
            .into_iter()
            .map(|(product, seller)| with_seller(product, seller))
            .collect()
    }

    pub async fn get(&self, product_id: i32) -> Result<Option<ProductDto>, Error> {
        match ProductRepository::new(self.db).get(product_id).await? {
            Some((product, seller)) => Ok(Some(with_seller(product, seller)?)),
            None => Ok(None),
        }
    }

    /// Gets every product listed by `seller_id`, newest first
    pub async fn get_by_seller(&self, seller_id: i32) -> Result<Vec<ProductDto>, Error> {
        let products = ProductRepository::new(self.db)
            .get_by_seller(seller_id)
            .await?;

        product_dtos(self.db, products).await
    }

    /// Updates a product owned by `user_id` and notifies them
    ///
    /// # Returns
    /// - `Ok(ProductDto)` - The updated product
    /// - `Err(Error::NotFound)` - Product does not exist
    /// - `Err(Error::Forbidden)` - Product belongs to another seller
    /// - `Err(Error::BadRequest)` - A provided field is invalid
    pub async fn update(
        &self,
        user_id: i32,
        product_id: i32,
        dto: UpdateProductDto,
    ) -> Result<ProductDto, Error> {
        let txn = self.db.begin().await?;
        let product_repo = ProductRepository::new(&txn);

        let Some((product, seller)) = product_repo.get(product_id).await? else {
            return Err(Error::NotFound("Product not found".to_string()));
        };

        if product.seller_id != user_id {
            return Err(Error::Forbidden(
                "Not authorized to update this product".to_string(),
            ));
        }

        let category = match dto.category.as_deref() {
            Some(category) => Some(parse_category(category)?.as_str().to_string()),
            None => None,
        };
        let name = match dto.name {
            Some(name) if name.trim().is_empty() => {
                return Err(Error::BadRequest("Product name is required".to_string()))
            }
            name => name.map(|name| name.trim().to_string()),
        };
        let price = match dto.price {
            Some(price) => Some(validate_price(Some(price))?),
            None => None,
        };
        let quantity = match dto.quantity {
            Some(quantity) => Some(validate_quantity(Some(quantity))?),
            None => None,
        };
        let image = dto.image.filter(|image| !image.trim().is_empty());

        let changes = ProductChanges {
            name,
            price,
            quantity,
            description: dto.description,
            category,
            image,
        };

        let updated = product_repo.update(product.id, changes).await?.ok_or_else(|| {
            Error::InternalError(format!("Product ID {} vanished during update", product.id))
        })?;

        NotificationRepository::new(&txn)
            .create(
                NewNotification::new(
                    user_id,
                    NotificationKind::Product,
                    format!("Your product \"{}\" was updated successfully.", updated.name),
                )
                .product(updated.id)
                .action("update"),
            )
            .await?;

        txn.commit().await?;

        with_seller(updated, seller)
    }

    /// Deletes a product owned by `user_id`, removing it from every cart
    ///
    /// # Returns
    /// - `Ok(())` - Product deleted
    /// - `Err(Error::NotFound)` - Product does not exist
    /// - `Err(Error::Forbidden)` - Product belongs to another seller
    /// - `Err(Error::BadRequest)` - Product is referenced by an order
    pub async fn delete(&self, user_id: i32, product_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let product_repo = ProductRepository::new(&txn);

        let Some((product, _)) = product_repo.get(product_id).await? else {
            return Err(Error::NotFound("Product not found".to_string()));
        };

        if product.seller_id != user_id {
            return Err(Error::Forbidden(
                "Not authorized to delete this product".to_string(),
            ));
        }

        if product_repo.has_orders(&[product.id]).await? {
            return Err(Error::BadRequest(
                "Product has existing orders and cannot be deleted".to_string(),
            ));
        }

        NotificationRepository::new(&txn)
            .create(
                NewNotification::new(
                    user_id,
                    NotificationKind::Product,
                    format!("Your product \"{}\" was deleted.", product.name),
                )
                .product(product.id)
                .action("delete"),
            )
            .await?;

        CartRepository::new(&txn)
            .delete_by_products(&[product.id])
            .await?;
        product_repo.delete(product.id).await?;

        txn.commit().await?;

        Ok(())
    }
}

/// Converts products into DTOs, loading their sellers in one query
pub(crate) async fn product_dtos<C: ConnectionTrait>(
    db: &C,
    products: Vec<entity::luxe_product::Model>,
) -> Result<Vec<ProductDto>, Error> {
    let mut seller_ids: Vec<i32> = products.iter().map(|product| product.seller_id).collect();
    seller_ids.sort_unstable();
    seller_ids.dedup();

    let sellers: HashMap<i32, entity::luxe_user::Model> = UserRepository::new(db)
        .get_many(&seller_ids)
        .await?
        .into_iter()
        .map(|seller| (seller.id, seller))
        .collect();

    products
        .into_iter()
        .map(|product| {
            let seller = sellers.get(&product.seller_id).cloned();
            with_seller(product, seller)
        })
        .collect()
}

fn with_seller(
    product: entity::luxe_product::Model,
    seller: Option<entity::luxe_user::Model>,
) -> Result<ProductDto, Error> {
    let seller = seller.ok_or_else(|| {
        Error::InternalError(format!(
            "Seller ID {} of product ID {} not found",
            product.seller_id, product.id
        ))
    })?;

    Ok(ProductDto::new(product, &seller)?)
}

fn parse_category(category: &str) -> Result<ProductCategory, Error> {
    category.parse().map_err(|_| {
        Error::BadRequest(format!(
            "Invalid category. Choose from: {}",
            ProductCategory::choices()
        ))
    })
}

fn validate_price(price: Option<f64>) -> Result<f64, Error> {
    match price {
        Some(price) if price.is_finite() && price > 0.0 => Ok(price),
        _ => Err(Error::BadRequest(
            "Price must be a number greater than 0".to_string(),
        )),
    }
}

fn validate_quantity(quantity: Option<i32>) -> Result<i32, Error> {
    match quantity {
        Some(quantity) if quantity >= 0 => Ok(quantity),
        _ => Err(Error::BadRequest(
            "Quantity must be a whole number of at least 0".to_string(),
        )),
    }
}
