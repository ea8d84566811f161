//! [`ActorEntity`] implementation for the [`User`] record.

use crate::model::{User, UserId, UserInput};
use crate::user_actor::UserError;
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserInput;
    type Update = UserInput;
    type Context = ();
    type Error = UserError;

    fn id(&self) -> UserId {
        self.id
    }

    /// Builds a record from every input field except `id`, which the actor assigns.
    fn from_create_params(id: UserId, params: UserInput) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            full_name: params.full_name,
            address: params.address,
            age: params.age,
            coin: params.coin,
        })
    }

    /// Overwrites every field except the ID.
    async fn on_update(
        &mut self,
        update: UserInput,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.full_name = update.full_name;
        self.address = update.address;
        self.age = update.age;
        self.coin = update.coin;
        Ok(())
    }
}
