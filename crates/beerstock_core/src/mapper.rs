//! Conversion between transfer and storage beer shapes.
//!
//! # Invariants
//! - Conversions are pure and total; no validation happens here.
//! - `to_dto(to_model(dto)) == dto` for every input.

use crate::model::beer::{Beer, BeerDto};

/// Bidirectional mapping contract injected into `BeerService`.
pub trait BeerMapper {
    fn to_model(&self, dto: &BeerDto) -> Beer;
    fn to_dto(&self, beer: &Beer) -> BeerDto;
}

/// Field-by-field mapper used outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBeerMapper;

impl BeerMapper for DefaultBeerMapper {
    fn to_model(&self, dto: &BeerDto) -> Beer {
        Beer {
            id: dto.id,
            name: dto.name.clone(),
            brand: dto.brand.clone(),
            max: dto.max,
            quantity: dto.quantity,
            kind: dto.kind,
        }
    }

    fn to_dto(&self, beer: &Beer) -> BeerDto {
        BeerDto {
            id: beer.id,
            name: beer.name.clone(),
            brand: beer.brand.clone(),
            max: beer.max,
            quantity: beer.quantity,
            kind: beer.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BeerMapper, DefaultBeerMapper};
    use crate::model::beer::{BeerDto, BeerType};

    #[test]
    fn mapping_preserves_every_field() {
        let mut dto = BeerDto::new("Brahma", "Ambev", 60, 20, BeerType::Lager);
        dto.id = Some(7);

        let model = DefaultBeerMapper.to_model(&dto);
        assert_eq!(model.id, Some(7));
        assert_eq!(model.name, "Brahma");
        assert_eq!(model.kind, BeerType::Lager);
        assert_eq!(DefaultBeerMapper.to_dto(&model), dto);
    }
}
