//! Menu entry domain model.

use crate::model::dish::{CreateDishDto, DishDto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    /// Zero until the store assigns an identifier.
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub category: String,
    pub img: String,
}

impl Dish {
    pub fn from_entity(entity: entity::dish::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            category: entity.category,
            img: entity.img,
        }
    }

    pub fn into_entity(self) -> entity::dish::Model {
        entity::dish::Model {
            id: self.id,
            name: self.name,
            price: self.price,
            category: self.category,
            img: self.img,
        }
    }

    pub fn from_dto(dto: DishDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            price: dto.price,
            category: dto.category,
            img: dto.img,
        }
    }

    /// A dish not yet stored; its id is left unassigned.
    pub fn from_create_dto(dto: CreateDishDto) -> Self {
        Self {
            id: 0,
            name: dto.name,
            price: dto.price,
            category: dto.category,
            img: dto.img,
        }
    }

    pub fn into_dto(self) -> DishDto {
        DishDto {
            id: self.id,
            name: self.name,
            price: self.price,
            category: self.category,
            img: self.img,
        }
    }
}
