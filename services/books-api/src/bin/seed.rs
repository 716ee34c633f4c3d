/// Catalog seeding CLI
///
/// Loads the five-book starter dataset and its cast entries into DynamoDB
/// with a single BatchWriteItem call. Intended for fresh deployments and
/// local development stacks.
///
/// # Environment variables
/// - TABLE_NAME: Books table name (overridable with --table)
/// - CAST_TABLE_NAME: BookCast table name (overridable with --cast-table)
///
/// ```bash
/// export TABLE_NAME=Books
/// export CAST_TABLE_NAME=BookCast
/// cargo run --bin seed
///
/// # Explicit table names
/// cargo run --bin seed -- --table Books --cast-table BookCast
/// ```
use aws_sdk_dynamodb::types::{AttributeValue, PutRequest, WriteRequest};
use books_api::domain::{Book, CastMember};
use books_api::infrastructure::init_logging;
use clap::Parser;
use lambda_http::Error;
use serde_dynamo::aws_sdk_dynamodb_1::to_item;
use std::collections::HashMap;
use tracing::{info, warn};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "seed")]
#[command(about = "Load the starter book catalog into DynamoDB")]
struct CliArgs {
    /// Books table name (overrides TABLE_NAME)
    #[arg(long, short = 't')]
    table: Option<String>,

    /// BookCast table name (overrides CAST_TABLE_NAME)
    #[arg(long, short = 'c')]
    cast_table: Option<String>,
}

/// The starter catalog: five classics with ids 1 through 5.
fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "To Kill a Mockingbird".to_string(),
            author: "Harper Lee".to_string(),
            genre: "Fiction".to_string(),
            description: "A young girl watches her father defend a Black man falsely \
                          accused of a crime in the Depression-era South."
                .to_string(),
            publication_date: "1960-07-11".to_string(),
        },
        Book {
            id: 2,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            genre: "Dystopian".to_string(),
            description: "A low-ranking party member rebels against a totalitarian \
                          state that watches everything and rewrites the past."
                .to_string(),
            publication_date: "1949-06-08".to_string(),
        },
        Book {
            id: 3,
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            genre: "Fiction".to_string(),
            description: "A mysterious millionaire throws lavish parties in pursuit \
                          of a love lost years before."
                .to_string(),
            publication_date: "1925-04-10".to_string(),
        },
        Book {
            id: 4,
            title: "Pride and Prejudice".to_string(),
            author: "Jane Austen".to_string(),
            genre: "Romance".to_string(),
            description: "The spirited Elizabeth Bennet spars with the proud Mr. \
                          Darcy in Regency England."
                .to_string(),
            publication_date: "1813-01-28".to_string(),
        },
        Book {
            id: 5,
            title: "The Catcher in the Rye".to_string(),
            author: "J.D. Salinger".to_string(),
            genre: "Fiction".to_string(),
            description: "An expelled prep school student wanders New York City, \
                          scornful of the adult world's phoniness."
                .to_string(),
            publication_date: "1951-07-16".to_string(),
        },
    ]
}

/// One protagonist per seeded book.
fn seed_cast() -> Vec<CastMember> {
    vec![
        CastMember {
            book_id: 1,
            author_name: "Harper Lee".to_string(),
            role_name: "Scout Finch".to_string(),
            role_description: "The narrator, a curious six-year-old girl.".to_string(),
        },
        CastMember {
            book_id: 2,
            author_name: "George Orwell".to_string(),
            role_name: "Winston Smith".to_string(),
            role_description: "A records clerk who starts doubting the Party.".to_string(),
        },
        CastMember {
            book_id: 3,
            author_name: "F. Scott Fitzgerald".to_string(),
            role_name: "Jay Gatsby".to_string(),
            role_description: "A self-made millionaire chasing an old love.".to_string(),
        },
        CastMember {
            book_id: 4,
            author_name: "Jane Austen".to_string(),
            role_name: "Elizabeth Bennet".to_string(),
            role_description: "The quick-witted second Bennet daughter.".to_string(),
        },
        CastMember {
            book_id: 5,
            author_name: "J.D. Salinger".to_string(),
            role_name: "Holden Caulfield".to_string(),
            role_description: "A disaffected teenager adrift in New York.".to_string(),
        },
    ]
}

/// Convert seed records into BatchWriteItem put requests.
fn write_requests<T: serde::Serialize>(records: &[T]) -> Result<Vec<WriteRequest>, Error> {
    records
        .iter()
        .map(|record| {
            let item: HashMap<String, AttributeValue> = to_item(record)?;
            let put = PutRequest::builder().set_item(Some(item)).build()?;
            Ok(WriteRequest::builder().put_request(put).build())
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured logging
    init_logging();

    let args = CliArgs::parse();

    let books_table = match args.table.or_else(|| std::env::var("TABLE_NAME").ok()) {
        Some(name) => name,
        None => return Err(Error::from("Missing environment variable: TABLE_NAME")),
    };
    let cast_table = match args.cast_table.or_else(|| std::env::var("CAST_TABLE_NAME").ok()) {
        Some(name) => name,
        None => return Err(Error::from("Missing environment variable: CAST_TABLE_NAME")),
    };

    let books = seed_books();
    let cast = seed_cast();

    info!(
        books_table = %books_table,
        cast_table = %cast_table,
        book_count = books.len(),
        cast_count = cast.len(),
        "seeding catalog"
    );

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);

    // Both tables fit comfortably inside one 25-item batch.
    let result = client
        .batch_write_item()
        .request_items(&books_table, write_requests(&books)?)
        .request_items(&cast_table, write_requests(&cast)?)
        .send()
        .await
        .map_err(|e| Error::from(e.into_service_error().to_string()))?;

    // Unprocessed items are reported, not retried. Rerunning the seed is
    // idempotent because every write is a full-item put.
    match result.unprocessed_items() {
        Some(unprocessed) if !unprocessed.is_empty() => {
            for (table, requests) in unprocessed {
                warn!(
                    table = %table,
                    count = requests.len(),
                    "batch write left unprocessed items"
                );
            }
        }
        _ => info!("seed complete"),
    }

    Ok(())
}
