use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // Ids come from the sequences: categories 1..=3, products 1..=25.
        db.execute_unprepared(
            r#"
            INSERT INTO categories (name)
            VALUES ('Books'), ('Electronics'), ('Computers')
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO products (name, description, price, image_url, date)
            VALUES
                ('The Lord of the Rings', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.', 90.5, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/1-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-13T20:50:07Z'),
                ('Smart TV', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 2190.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/2-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('Macbook Pro', 'Nam eleifend maximus tortor, at mollis.', 1250.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/3-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer', 'Donec aliquet odio ac rhoncus cursus.', 1200.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/4-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('Rails for Dummies', 'Cras fringilla convallis sem vel faucibus.', 100.99, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/5-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Ex', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1350.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/6-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer X', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1350.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/7-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Alfa', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1850.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/8-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Tera', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1950.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/9-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Y', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1700.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/10-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Nitro', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1450.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/11-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Card', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1850.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/12-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Plus', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1350.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/13-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Hera', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 2250.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/14-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Weed', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 2200.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/15-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Max', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 2340.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/16-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Turbo', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1280.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/17-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Hot', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1450.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/18-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Ez', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1750.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/19-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Tr', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1650.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/20-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Tx', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1680.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/21-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Er', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 1850.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/22-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Min', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 2250.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/23-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Boo', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 2350.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/24-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z'),
                ('PC Gamer Foo', 'Lorem ipsum dolor sit amet, consectetur adipiscing elit.', 4170.0, 'https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img/25-big.jpg', TIMESTAMP WITH TIME ZONE '2020-07-14T10:00:00Z')
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO product_categories (product_id, category_id)
            SELECT p.id, c.id
            FROM (VALUES
                ('The Lord of the Rings', 'Books'),
                ('Smart TV', 'Electronics'),
                ('Smart TV', 'Computers'),
                ('Macbook Pro', 'Computers'),
                ('PC Gamer', 'Computers'),
                ('Rails for Dummies', 'Books'),
                ('PC Gamer Ex', 'Computers'),
                ('PC Gamer X', 'Computers'),
                ('PC Gamer Alfa', 'Computers'),
                ('PC Gamer Tera', 'Computers'),
                ('PC Gamer Y', 'Computers'),
                ('PC Gamer Nitro', 'Computers'),
                ('PC Gamer Card', 'Computers'),
                ('PC Gamer Plus', 'Computers'),
                ('PC Gamer Hera', 'Computers'),
                ('PC Gamer Weed', 'Computers'),
                ('PC Gamer Max', 'Computers'),
                ('PC Gamer Turbo', 'Computers'),
                ('PC Gamer Hot', 'Computers'),
                ('PC Gamer Ez', 'Computers'),
                ('PC Gamer Tr', 'Computers'),
                ('PC Gamer Tx', 'Computers'),
                ('PC Gamer Er', 'Computers'),
                ('PC Gamer Min', 'Computers'),
                ('PC Gamer Boo', 'Computers'),
                ('PC Gamer Foo', 'Computers')
            ) AS seed(product_name, category_name)
            JOIN products p ON p.name = seed.product_name
            JOIN categories c ON c.name = seed.category_name
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("DELETE FROM product_categories").await?;
        db.execute_unprepared("DELETE FROM products").await?;
        db.execute_unprepared("DELETE FROM categories").await?;
        db.execute_unprepared("ALTER SEQUENCE products_id_seq RESTART WITH 1")
            .await?;
        db.execute_unprepared("ALTER SEQUENCE categories_id_seq RESTART WITH 1")
            .await?;

        Ok(())
    }
}
