use anyhow::{Context, Result};
use clap::Parser;
use lightning_proxies::{
    Action, Amount, CredentialPlan, DEFAULT_BASE_URL, LightningProxies, PlanKind, PlanOrder,
    PurchaseParams,
};
use serde_json::Value;

/// lightning - Lightning Proxies reseller API client
///
/// Every subcommand issues a single API request and prints the JSON response.
///
/// Examples:
///   lightning info residential PLAN_ID
///   lightning gigabyte residential remove PLAN_ID 0.5
#[derive(Parser, Debug)]
#[command(author, version = env!("LIGHTNING_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Reseller API key
    #[arg(long, env = "LIGHTNING_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// API base URL
    #[arg(
        long = "api-url",
        env = "LIGHTNING_API_URL",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    api_url: String,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Purchase a plan (residential, mobile, IPv6, datacenter, ISP)
    Purchase(PurchaseArgs),

    /// Show a plan
    Info {
        /// residential, ipv6, datacenter, mobile or isp
        kind: PlanKind,
        plan_id: String,
    },

    /// Page through residential plans
    MassCheck {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },

    /// Add or remove a whitelisted IP address
    Whitelist {
        #[arg(value_enum)]
        kind: WhitelistKind,
        action: Action,
        plan_id: String,
        ip_address: String,
    },

    /// Add or remove gigabytes
    Gigabyte {
        #[arg(value_enum)]
        kind: GigabyteKind,
        action: Action,
        plan_id: String,
        #[arg(allow_negative_numbers = true)]
        gb: Amount,
    },

    /// List residential countries
    Countries,

    /// List residential states of a country
    States { country_code: String },

    /// List residential cities of a state
    Cities { country_code: String, state: String },

    /// List residential ISPs of a country
    Isps { country_code: String },

    /// List mobile countries
    MobileCountries,

    /// Show general product information
    Product { plan_id: String },

    /// Change the username and password of a subscription
    Credentials(CredentialsArgs),
}

#[derive(clap::Args, Debug)]
struct PurchaseArgs {
    /// residential, mobile, IPv6, datacenter or ISP
    option: String,
    #[arg(long, allow_negative_numbers = true)]
    bandwidth: Option<Amount>,
    #[arg(long, allow_negative_numbers = true)]
    plan: Option<Amount>,
    #[arg(long, allow_negative_numbers = true)]
    speed: Option<Amount>,
    #[arg(long)]
    ip: Option<String>,
    #[arg(long)]
    region: Option<String>,
}

#[derive(clap::Args, Debug)]
struct CredentialsArgs {
    subscription_id: String,
    /// residential or isp
    #[arg(long)]
    plan_type: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
    /// http or socks (ISP plans only)
    #[arg(long)]
    proxy_type: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum WhitelistKind {
    Ipv6,
    Datacenter,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum GigabyteKind {
    Ipv6,
    Residential,
    Mobile,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let api_key = cli
        .api_key
        .context("Missing API key: pass --api-key or set LIGHTNING_API_KEY")?;
    let api = LightningProxies::with_base_url(&api_key, &cli.api_url)
        .context("Failed to create API client")?;

    let output = run(&api, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run(api: &LightningProxies, command: Commands) -> lightning_proxies::Result<Value> {
    let value = match command {
        Commands::Purchase(args) => {
            let params = PurchaseParams {
                bandwidth: args.bandwidth,
                plan: args.plan,
                speed: args.speed,
                ip: args.ip,
                region: args.region,
            };
            let order = PlanOrder::from_params(&args.option, &params)?;
            api.purchase_plan(&order).await?
        }
        Commands::Info { kind, plan_id } => api.get_proxy_info(kind, &plan_id).await?,
        Commands::MassCheck { page, limit } => api.get_residential_mass_check(page, limit).await?,
        Commands::Whitelist {
            kind,
            action,
            plan_id,
            ip_address,
        } => match kind {
            WhitelistKind::Ipv6 => {
                api.manage_ipv6_whitelist(action, &plan_id, &ip_address)
                    .await?
            }
            WhitelistKind::Datacenter => {
                api.manage_datacenter_whitelist(action, &plan_id, &ip_address)
                    .await?
            }
        },
        Commands::Gigabyte {
            kind,
            action,
            plan_id,
            gb,
        } => match kind {
            GigabyteKind::Ipv6 => api.manage_ipv6_gigabyte(action, &plan_id, gb).await?,
            GigabyteKind::Residential => {
                api.manage_residential_gigabyte(action, &plan_id, gb)
                    .await?
            }
            GigabyteKind::Mobile => api.manage_mobile_gigabyte(action, &plan_id, gb).await?,
        },
        Commands::Countries => Value::Array(api.get_residential_countries().await?),
        Commands::States { country_code } => {
            Value::Array(api.get_residential_states(&country_code).await?)
        }
        Commands::Cities {
            country_code,
            state,
        } => Value::Array(api.get_residential_cities(&country_code, &state).await?),
        Commands::Isps { country_code } => {
            Value::Array(api.get_residential_isp_list(&country_code).await?)
        }
        Commands::MobileCountries => Value::Array(api.get_mobile_countries().await?),
        Commands::Product { plan_id } => api.get_product_info(&plan_id).await?,
        Commands::Credentials(args) => {
            let plan = CredentialPlan::parse(&args.plan_type, args.proxy_type.as_deref())?;
            api.change_credentials(&args.subscription_id, plan, &args.username, &args.password)
                .await?
        }
    };
    Ok(value)
}
