use clap::{Parser, Subcommand};
use silo_core::{
    default_capacity, Config, Registry, Result, WarehouseId, WarehouseKind, KNOWN_PRODUCTS,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "silo")]
#[command(about = "Warehouse inventory management", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all warehouses (default)
    List,

    /// Create a new warehouse
    Create {
        name: String,

        /// Maximum quantity the warehouse can hold. Defaults to the known
        /// product's nominal capacity when the name is in the reference table.
        capacity: Option<f64>,

        /// Warehouse kind (fruit, custom)
        #[arg(long, default_value = "fruit")]
        kind: String,
    },

    /// Show one warehouse with its products
    Show { id: u64 },

    /// Rename a warehouse and change its capacity
    Edit {
        id: u64,
        name: String,
        capacity: f64,
    },

    /// Add stock of a product to a warehouse
    Add {
        id: u64,
        product: String,
        quantity: f64,
    },

    /// Remove a product (its entire quantity) from a warehouse
    Remove { id: u64, product: String },

    /// Delete a warehouse and everything in it
    Delete { id: u64 },

    /// Print the known-products reference table
    Products,
}

fn main() -> ExitCode {
    silo_core::logging::init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `Ok(false)` is a domain-level refusal (already reported to the user);
/// `Err` is an infrastructure failure.
fn run() -> Result<bool> {
    let cli = Cli::parse();

    // Determine data directory
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => Config::load()?.data.data_dir,
    };
    tracing::debug!("Using data directory {:?}", data_dir);
    let registry_path = data_dir.join("registry.json");

    match cli.command {
        Some(Commands::List) | None => cmd_list(&registry_path),
        Some(Commands::Create {
            name,
            capacity,
            kind,
        }) => cmd_create(&registry_path, &name, capacity, &kind),
        Some(Commands::Show { id }) => cmd_show(&registry_path, WarehouseId(id)),
        Some(Commands::Edit { id, name, capacity }) => {
            cmd_edit(&registry_path, WarehouseId(id), &name, capacity)
        }
        Some(Commands::Add {
            id,
            product,
            quantity,
        }) => cmd_add(&registry_path, WarehouseId(id), &product, quantity),
        Some(Commands::Remove { id, product }) => {
            cmd_remove(&registry_path, WarehouseId(id), &product)
        }
        Some(Commands::Delete { id }) => cmd_delete(&registry_path, WarehouseId(id)),
        Some(Commands::Products) => cmd_products(),
    }
}

fn cmd_list(path: &Path) -> Result<bool> {
    let registry = Registry::load(path)?;

    if registry.is_empty() {
        println!("No warehouses.");
        return Ok(true);
    }

    println!(
        "{:>4}  {:<24}  {:<6}  {:>10}  {:>10}",
        "id", "name", "kind", "balance", "capacity"
    );
    for w in registry.list() {
        println!(
            "{:>4}  {:<24}  {:<6}  {:>10}  {:>10}",
            w.id(),
            w.name(),
            w.kind().label(),
            w.balance(),
            w.capacity()
        );
    }
    Ok(true)
}

fn cmd_create(path: &Path, name: &str, capacity: Option<f64>, kind: &str) -> Result<bool> {
    let kind = WarehouseKind::parse(kind).unwrap_or_else(|| {
        eprintln!("Unknown kind: {}. Using fruit.", kind);
        WarehouseKind::Fruit
    });

    let capacity = match capacity.or_else(|| default_capacity(name)) {
        Some(c) => c,
        None => {
            eprintln!("✗ Invalid warehouse data! No capacity given and {:?} is not a known product.", name);
            return Ok(false);
        }
    };

    if name.trim().is_empty() || !(capacity > 0.0) {
        eprintln!("✗ Invalid warehouse data!");
        return Ok(false);
    }

    let mut registry = Registry::load(path)?;
    match registry.create(name, capacity, kind) {
        Some(id) => {
            registry.save(path)?;
            println!("✓ Created warehouse {} (id {}, capacity {})", name, id, capacity);
            Ok(true)
        }
        None => {
            eprintln!("✗ Name already exists!");
            Ok(false)
        }
    }
}

fn cmd_show(path: &Path, id: WarehouseId) -> Result<bool> {
    let registry = Registry::load(path)?;
    let Some(w) = registry.get(id) else {
        eprintln!("✗ Warehouse not found!");
        return Ok(false);
    };

    println!("{} (id {}, {})", w.name(), w.id(), w.kind());
    println!("  {}", w.ledger());
    println!("  created {}", w.created_at().format("%Y-%m-%d %H:%M"));

    if w.products().is_empty() {
        println!("  no products stocked");
    } else {
        println!("  products:");
        let mut products: Vec<_> = w.products().iter().collect();
        products.sort_by(|a, b| a.0.cmp(b.0));
        for (name, quantity) in products {
            println!("    {:<24} {:>10}", name, quantity);
        }
    }

    if w.kind() == WarehouseKind::Fruit {
        println!("  known products:");
        for p in KNOWN_PRODUCTS {
            println!("    {:<24} {:>10}", p.name, p.default_capacity);
        }
    }

    Ok(true)
}

fn cmd_edit(path: &Path, id: WarehouseId, name: &str, capacity: f64) -> Result<bool> {
    if name.trim().is_empty() || !(capacity > 0.0) {
        eprintln!("✗ Invalid warehouse data!");
        return Ok(false);
    }

    let mut registry = Registry::load(path)?;
    match registry.rename_and_resize(id, name, capacity) {
        Ok(()) => {
            registry.save(path)?;
            println!("✓ Warehouse updated");
            Ok(true)
        }
        Err(e) => {
            eprintln!("✗ {}!", e);
            Ok(false)
        }
    }
}

fn cmd_add(path: &Path, id: WarehouseId, product: &str, quantity: f64) -> Result<bool> {
    if product.trim().is_empty() || !(quantity > 0.0) {
        eprintln!("✗ Invalid product data!");
        return Ok(false);
    }

    let mut registry = Registry::load(path)?;
    if registry.add_product(id, product, quantity) {
        registry.save(path)?;
        println!("✓ Added {} units of {}", quantity, product);
        Ok(true)
    } else {
        eprintln!("✗ Could not add product. Check warehouse capacity!");
        Ok(false)
    }
}

fn cmd_remove(path: &Path, id: WarehouseId, product: &str) -> Result<bool> {
    let mut registry = Registry::load(path)?;
    if registry.remove_product(id, product) {
        registry.save(path)?;
        println!("✓ Removed {}", product);
        Ok(true)
    } else {
        eprintln!("✗ Could not remove product!");
        Ok(false)
    }
}

fn cmd_delete(path: &Path, id: WarehouseId) -> Result<bool> {
    let mut registry = Registry::load(path)?;
    if registry.delete(id) {
        registry.save(path)?;
        println!("✓ Warehouse deleted");
        Ok(true)
    } else {
        eprintln!("✗ Could not delete warehouse!");
        Ok(false)
    }
}

fn cmd_products() -> Result<bool> {
    println!("{:<24} {:>16}", "product", "default capacity");
    for p in KNOWN_PRODUCTS {
        println!("{:<24} {:>16}", p.name, p.default_capacity);
    }
    Ok(true)
}
