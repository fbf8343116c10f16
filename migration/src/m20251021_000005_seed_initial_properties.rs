use chrono::Utc;
use sea_orm_migration::prelude::*;

use super::m20251020_000002_create_property_table::Property;

/// Listings the frontend links to by id.
const INITIAL_PROPERTIES: [(i32, &str, &str, f64, &str, &str); 5] = [
    (
        1,
        "Apartamento en El Poblado",
        "Cl. 9 #37, El Poblado, Medellín, Antioquia",
        450000.0,
        "Hermoso apartamento en una de las mejores zonas de Medellín, cerca de centros comerciales y restaurantes.",
        "https://images.ctfassets.net/8lc7xdlkm4kt/33L5l2aTXdJAAEfw55n0Yh/7472faf6b498fdc11091fc65a5c69165/render-sobre-planos-saint-michel.jpg",
    ),
    (
        2,
        "Casa colonial en Cartagena",
        "10-46 Media Luna 10, Getsemaní, Cartagena de Indias, Bolívar",
        500000.0,
        "Encantadora casa colonial con vistas al mar, en el centro histórico de Cartagena.",
        "https://media-luna-hostel.cartagena-hotels.net/data/Photos/1080x700w/10392/1039228/1039228984/cartagena-media-luna-hostel-photo-1.JPEG",
    ),
    (
        3,
        "Loft en Bogotá",
        "Av Suba #125-98, Bogotá",
        320000.0,
        "Moderno loft en el centro de Bogotá, ideal para viajeros de negocios.",
        "https://latinexclusive.com/sites/default/files/styles/main_property_slide/public/api_file_downloads/3862061_1.jpg?itok=qxmdZ3oA",
    ),
    (
        4,
        "Cabaña en el Eje Cafetero",
        "2 kilómetros antes de termales Santa Rosa por la desviación a la Paloma vereda, San RAMON, Santa Rosa de Cabal, Risaralda",
        800000.0,
        "Cabaña rústica rodeada de naturaleza, perfecta para desconectarse y disfrutar del café colombiano.",
        "https://asoaturquindio.com/wp-content/uploads/2023/09/cabanas-la-herradura-4-1.jpg",
    ),
    (
        5,
        "Hostal en Santa Marta",
        "Cl. 14 #3-58, Comuna 2, Santa Marta, Magdalena",
        50000.0,
        "Hostal económico a pocos minutos de la playa, ideal para mochileros y aventureros.",
        "https://cf.bstatic.com/xdata/images/hotel/max500/151251581.jpg?k=02b942afead8be7bea67cd35453662d8a6ae787336565b884c55aca6dbedcd08&o=",
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let now = Utc::now();

        let mut insert = Query::insert();
        insert
            .into_table(Property::Table)
            .columns([
                Property::Id,
                Property::Name,
                Property::Location,
                Property::Price,
                Property::Description,
                Property::ImageUrl,
                Property::CreatedAt,
            ])
            .on_conflict(OnConflict::column(Property::Id).do_nothing().to_owned());

        for (id, name, location, price, description, image_url) in INITIAL_PROPERTIES {
            insert
                .values([
                    id.into(),
                    name.into(),
                    location.into(),
                    price.into(),
                    description.into(),
                    image_url.into(),
                    now.into(),
                ])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids: Vec<i32> = INITIAL_PROPERTIES.iter().map(|p| p.0).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Property::Table)
                    .and_where(Expr::col(Property::Id).is_in(ids))
                    .to_owned(),
            )
            .await
    }
}
