//! Story generator - short legends built from a hero's class and best attribute

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::entities::Hero;
use crate::domain::value_objects::Attribute;

struct ClassLore {
    intros: &'static [&'static str],
    /// Indexed like `Attribute::ALL`
    challenges: [&'static [&'static str]; 4],
    resolutions: &'static [&'static str],
}

// `{name}` is replaced with the hero's name.
const WARRIOR: ClassLore = ClassLore {
    intros: &[
        "{name}, um guerreiro de coração valente, nasceu nas terras ásperas de Eldoria, onde o clangor das espadas ecoa como trovões.",
        "{name}, forjado nas chamas da guerra, é uma lenda nas planícies de Valthor.",
    ],
    challenges: [
        &[
            "Com sua força descomunal, {name} enfrentou o lendário Dragão de Obsidiana, cujas escamas eram impenetráveis.",
            "{name} derrubou uma muralha de pedra com um único golpe para salvar seus aliados.",
        ],
        &["{name} usou sua agilidade para desviar dos golpes mortais de um exército de orcs em uma emboscada nas Montanhas Sombrias."],
        &["{name} desvendou o enigma ancestral de uma fortaleza amaldiçoada, enganando seus guardiões espectrais."],
        &["{name} resistiu às provações de uma tempestade mágica, protegendo sua vila com sua resistência inabalável."],
    ],
    resolutions: &[
        "Após uma batalha épica, {name} emergiu vitorioso, trazendo paz às terras e gravando seu nome nas lendas de Eldoria.",
        "{name} foi coroado herói do povo, sua bravura cantada por gerações.",
    ],
};

const MAGE: ClassLore = ClassLore {
    intros: &[
        "{name}, um mago de olhos brilhantes e mente afiada, treinou nos antigos salões da Torre de Althar.",
        "Diz-se que {name} nasceu durante uma chuva de estrelas, um presságio do poder mágico que viria a dominar.",
    ],
    challenges: [
        &["{name} canalizou a fúria arcana em uma rajada física, destruindo a barreira de um colosso elemental."],
        &["{name} conjurou feitiços rápidos enquanto desviava dos ataques de criaturas etéreas no Labirinto dos Ecos."],
        &[
            "{name} decifrou o grimório perdido de Veruun, liberando uma magia esquecida pelos tempos.",
            "Com astúcia e conhecimento, {name} selou um demônio antigo usando apenas palavras rúnicas.",
        ],
        &["{name} manteve um campo mágico ativo por sete dias durante o Cerco de Aelthas."],
    ],
    resolutions: &[
        "{name} foi elevado ao título de Arquimago, guardião dos segredos do mundo.",
        "As estrelas brilham mais forte desde que {name} restaurou o equilíbrio mágico da terra.",
    ],
};

const ARCHER: ClassLore = ClassLore {
    intros: &[
        "{name}, criado nas florestas de Lirael, aprendeu a ouvir o sussurro das folhas e o chamado do vento.",
        "Dizem que nenhum alvo escapa aos olhos de {name}, o Arqueiro das Sombras.",
    ],
    challenges: [
        &["{name} puxou um arco encantado com tanta força que a flecha atravessou três cavaleiros inimigos."],
        &[
            "{name} disparou flechas enquanto saltava entre galhos, acertando alvos invisíveis aos olhos comuns.",
            "Com uma pirueta, {name} desviou de lâminas e lançou uma flecha certeira no coração de um espectro.",
        ],
        &["{name} traçou uma emboscada perfeita usando as correntes do vento e o reflexo da lua."],
        &["{name} aguentou noites frias nas Montanhas da Névoa sem dormir, protegendo sua tropa com vigilância inabalável."],
    ],
    resolutions: &[
        "As florestas voltaram a cantar após a vitória de {name}, e os animais o seguem como guardião eterno.",
        "O nome de {name} ecoa nas árvores, como lenda viva dos elfos e homens.",
    ],
};

const ROGUE: ClassLore = ClassLore {
    intros: &[
        "{name}, mestre das sombras, surgiu de um passado misterioso nas ruas de Thalnara.",
        "Poucos viram o rosto de {name}, mas todos conhecem seus feitos entre os becos escuros e castelos trancados.",
    ],
    challenges: [
        &["{name} surpreendeu os inimigos com ataques ágeis e uma força inesperada que quebrou correntes mágicas."],
        &[
            "{name} atravessou um salão repleto de armadilhas sem disparar um único mecanismo.",
            "Com movimentos graciosos, {name} roubou uma joia encantada do pescoço de um rei demônio.",
        ],
        &["{name} desvendou um código secreto que levava ao Tesouro do Imperador Caído."],
        &["Mesmo envenenado, {name} completou sua missão e desapareceu nas sombras."],
    ],
    resolutions: &[
        "Desde então, {name} é um mito contado pelos ladrões e admirado pelos inocentes salvos em silêncio.",
        "O nome de {name} não está nos livros, mas nas lendas sussurradas entre fogueiras.",
    ],
};

fn lore_for(class: &str) -> &'static ClassLore {
    match class {
        "Mago" => &MAGE,
        "Arqueiro" => &ARCHER,
        "Ladino" => &ROGUE,
        _ => &WARRIOR,
    }
}

fn pick<'a>(rng: &mut impl Rng, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

/// Three-sentence legend: intro, a feat matching the hero's best attribute, resolution
pub fn generate_story(hero: &Hero, rng: &mut impl Rng) -> String {
    let lore = lore_for(&hero.class);
    let trait_index = Attribute::ALL
        .iter()
        .position(|a| *a == hero.attributes.dominant())
        .unwrap_or(0);

    let parts = [
        pick(rng, lore.intros),
        pick(rng, lore.challenges[trait_index]),
        pick(rng, lore.resolutions),
    ];

    parts
        .iter()
        .map(|part| part.replace("{name}", &hero.name))
        .collect::<Vec<_>>()
        .join(" ")
}
