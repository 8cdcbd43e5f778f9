//! User service layer.
//!
//! Account registration and login, profile maintenance and account deletion. The shopping
//! cart lives in [`cart`] since it is stored per user.

pub mod cart;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{LoginDto, RegisterDto, UpdateUserDto, UserDetailDto, UserDto},
    server::{
        data::{
            expense::ExpenseRepository,
            notification::NotificationRepository,
            order::OrderRepository,
            product::ProductRepository,
            user::{cart::CartRepository, UserRepository},
        },
        error::{auth::AuthError, Error},
        service::{order::order_dtos, product::product_dtos},
        util::placeholder::{is_placeholder_image, placeholder_image_url},
    },
};

/// Bcrypt work factor for stored password hashes
pub const PASSWORD_HASH_COST: u32 = 10;

const PASSWORD_MIN_LENGTH: usize = 8;
const PASSWORD_MAX_LENGTH: usize = 20;

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with a generated placeholder avatar.
    ///
    /// # Arguments
    /// - `dto` - Name, email and plain text password
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The new account
    /// - `Err(Error::BadRequest)` - A field is missing or the password length is out of range
    /// - `Err(Error::AuthError(AuthError::EmailInUse))` - Email already registered
    /// - `Err(Error::BcryptError)` - Password hashing failed
    pub async fn register(&self, dto: RegisterDto) -> Result<UserDto, Error> {
        let (Some(name), Some(email), Some(password)) = (
            non_empty(dto.name),
            non_empty(dto.email),
            dto.password.filter(|password| !password.is_empty()),
        ) else {
            return Err(Error::BadRequest("All fields are required".to_string()));
        };

        let password_length = password.chars().count();
        if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&password_length) {
            return Err(Error::BadRequest(format!(
                "Password must be between {} and {} characters",
                PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
            )));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.get_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailInUse.into());
        }

        let password_hash = bcrypt::hash(&password, PASSWORD_HASH_COST)?;
        let image = placeholder_image_url(&name);

        let user = user_repo.create(name, email, password_hash, image).await?;

        Ok(UserDto::from(user))
    }

    /// Checks an email and password pair.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Credentials match
    /// - `Err(Error::BadRequest)` - Email or password missing
    /// - `Err(Error::AuthError(AuthError::UnknownEmail))` - No account for the email
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Wrong password
    pub async fn login(&self, dto: LoginDto) -> Result<UserDto, Error> {
        let (Some(email), Some(password)) = (
            non_empty(dto.email),
            dto.password.filter(|password| !password.is_empty()),
        ) else {
            return Err(Error::BadRequest(
                "Please add email and password".to_string(),
            ));
        };

        let Some(user) = UserRepository::new(self.db).get_by_email(&email).await? else {
            return Err(AuthError::UnknownEmail.into());
        };

        if !bcrypt::verify(&password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(UserDto::from(user))
    }

    /// Retrieves a user's account information.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Retrieves a user together with the products they list and the orders they placed.
    pub async fn get_user_detail(&self, user_id: i32) -> Result<Option<UserDetailDto>, Error> {
        let Some(user) = UserRepository::new(self.db).get(user_id).await? else {
            return Ok(None);
        };

        let products = ProductRepository::new(self.db)
            .get_by_seller(user.id)
            .await?;
        let orders = OrderRepository::new(self.db).get_by_buyer(user.id).await?;

        Ok(Some(UserDetailDto {
            user: UserDto::from(user),
            products: product_dtos(self.db, products).await?,
            orders: order_dtos(self.db, orders).await?,
        }))
    }

    /// Renames a user, regenerating a placeholder avatar so it shows the new initials.
    ///
    /// Uploaded images are kept as they are.
    pub async fn update_user(&self, user_id: i32, dto: UpdateUserDto) -> Result<UserDto, Error> {
        let Some(name) = non_empty(dto.name) else {
            return Err(Error::BadRequest("Name is required".to_string()));
        };

        let user_repo = UserRepository::new(self.db);
        let user = user_repo.get(user_id).await?.ok_or_else(not_found)?;

        let image = if is_placeholder_image(&user.image) {
            placeholder_image_url(&name)
        } else {
            user.image
        };

        let user = user_repo
            .update_profile(user.id, name, image)
            .await?
            .ok_or_else(not_found)?;

        Ok(UserDto::from(user))
    }

    /// Sets the profile image to an already hosted image.
    ///
    /// # Returns
    /// - `Ok(String)` - The stored image URL
    /// - `Err(Error::BadRequest)` - No image given
    pub async fn upload_profile_image(
        &self,
        user_id: i32,
        image: Option<String>,
    ) -> Result<String, Error> {
        let Some(image) = non_empty(image) else {
            return Err(Error::BadRequest("No image uploaded".to_string()));
        };

        let user = UserRepository::new(self.db)
            .update_image(user_id, image)
            .await?
            .ok_or_else(not_found)?;

        Ok(user.image)
    }

    /// Replaces the profile image with a freshly generated placeholder.
    pub async fn delete_profile_image(&self, user_id: i32) -> Result<String, Error> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo.get(user_id).await?.ok_or_else(not_found)?;

        let user = user_repo
            .update_image(user.id, placeholder_image_url(&user.name))
            .await?
            .ok_or_else(not_found)?;

        Ok(user.image)
    }

    /// Deletes a user along with their cart, notifications, expenses and products.
    ///
    /// Orders the user placed, and order lines for products they listed, are kept with the
    /// link to the account or product cleared. Lines still carry the name and price recorded
    /// at purchase.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - User did not exist
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        let product_repo = ProductRepository::new(&txn);
        let product_ids: Vec<i32> = product_repo
            .get_by_seller(user_id)
            .await?
            .into_iter()
            .map(|product| product.id)
            .collect();

        let order_repo = OrderRepository::new(&txn);
        let detached_orders = order_repo.detach_buyer(user_id).await?.rows_affected;
        let detached_lines = order_repo.detach_products(&product_ids).await?.rows_affected;

        let cart_repo = CartRepository::new(&txn);
        cart_repo.delete_by_user(user_id).await?;
        cart_repo.delete_by_products(&product_ids).await?;
        NotificationRepository::new(&txn)
            .delete_by_user(user_id)
            .await?;
        ExpenseRepository::new(&txn).delete_by_user(user_id).await?;
        product_repo.delete_by_seller(user_id).await?;

        let result = UserRepository::new(&txn).delete(user_id).await?;

        txn.commit().await?;

        if result.rows_affected > 0 {
            tracing::info!(
                user_id,
                detached_orders,
                detached_lines,
                "Deleted user account"
            );
        }

        Ok(result.rows_affected > 0)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn not_found() -> Error {
    Error::NotFound("User not found".to_string())
}

#[cfg(test)]
mod tests;
