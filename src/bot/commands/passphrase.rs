use crate::bot::Data;
use crate::generator::{self, Strength};

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

/// Strength tiers selectable from the slash command.
#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum StrengthChoice {
    #[name = "weak"]
    Weak,
    #[name = "normal"]
    Normal,
    #[name = "strong"]
    Strong,
    #[name = "stronger"]
    Stronger,
    #[name = "insane"]
    Insane,
}

impl From<StrengthChoice> for Strength {
    fn from(choice: StrengthChoice) -> Self {
        match choice {
            StrengthChoice::Weak => Strength::Weak,
            StrengthChoice::Normal => Strength::Normal,
            StrengthChoice::Strong => Strength::Strong,
            StrengthChoice::Stronger => Strength::Stronger,
            StrengthChoice::Insane => Strength::Insane,
        }
    }
}

/// Generate a passphrase at the chosen strength
#[poise::command(slash_command)]
pub async fn passphrase(
    ctx: Context<'_>,
    #[description = "Strength tier"] strength: StrengthChoice,
) -> Result<(), Error> {
    let generated = {
        let mut rng = rand::thread_rng();
        generator::generate(&ctx.data().wordlist, strength.into(), &mut rng)
    };
    ctx.say(generated?).await?;
    Ok(())
}
