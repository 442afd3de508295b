// article-generation-service/src/composer/templates.rs
//
// Process-wide constant variant buckets for the article composers.
// Placeholders ({keyword}, {kw1}, {kw2}, {name}, {description}, {city},
// {phone}, {email}) are substituted by the composers. Each bucket is
// indexed independently with `seed % len`.

pub const TITLES_PROFESSIONAL: &[&str] = &[
    "Guide complet : {keyword} pour les entreprises",
    "{keyword} : stratégies et bonnes pratiques",
    "Tout savoir sur {keyword} : le guide professionnel",
    "Comment maîtriser {keyword} dans votre entreprise",
    "{keyword} : les clés d'une mise en œuvre réussie",
    "Optimiser {keyword} : méthodes éprouvées",
    "L'essentiel de {keyword} pour les dirigeants",
    "{keyword} : enjeux et opportunités pour votre activité",
    "Réussir votre projet {keyword} : étapes et conseils",
    "{keyword} : un levier de performance pour votre entreprise",
    "Les fondamentaux de {keyword} expliqués simplement",
    "{keyword} : analyse et recommandations d'experts",
    "Pourquoi {keyword} transforme les entreprises modernes",
    "{keyword} : de la théorie à la pratique",
    "Intégrer {keyword} dans votre stratégie d'entreprise",
    "{keyword} : les erreurs à éviter absolument",
    "Le guide méthodique de {keyword}",
    "{keyword} : mesurer et améliorer vos résultats",
    "Déployer {keyword} efficacement : notre approche",
    "{keyword} : panorama des meilleures pratiques",
];

pub const TITLES_CASUAL: &[&str] = &[
    "{keyword} : on vous explique tout !",
    "Et si on parlait de {keyword} ?",
    "{keyword} sans prise de tête",
    "Le petit guide sympa de {keyword}",
    "{keyword} : par où commencer ?",
    "On a décortiqué {keyword} pour vous",
    "{keyword} : nos astuces préférées",
    "Tout ce qu'on ne vous dit pas sur {keyword}",
    "{keyword} : démarrez du bon pied",
    "Cinq choses à savoir sur {keyword}",
    "{keyword}, c'est plus simple qu'il n'y paraît",
    "Lancez-vous dans {keyword} dès aujourd'hui",
    "{keyword} : le guide décontracté",
    "Pourquoi tout le monde parle de {keyword}",
    "{keyword} : nos conseils sans jargon",
    "Découvrez {keyword} en quelques minutes",
    "{keyword} : les bases, tout simplement",
    "Votre première approche de {keyword}",
    "{keyword} : évitez les pièges classiques",
    "Faites de {keyword} votre allié au quotidien",
];

pub const TITLES_FORMAL: &[&str] = &[
    "Étude approfondie de {keyword} en contexte professionnel",
    "{keyword} : cadre méthodologique et applications",
    "Analyse structurée de {keyword} pour les organisations",
    "De l'importance de {keyword} dans la stratégie d'entreprise",
    "{keyword} : état des lieux et perspectives",
    "Considérations stratégiques relatives à {keyword}",
    "{keyword} : approche normative et retours d'expérience",
    "Évaluation des dispositifs de {keyword} en entreprise",
    "{keyword} : synthèse des pratiques de référence",
    "Contribution à la compréhension de {keyword}",
    "{keyword} : exigences, contraintes et facteurs de succès",
    "Mise en perspective de {keyword} dans l'environnement économique",
    "{keyword} : référentiel d'implémentation",
    "Examen des modalités d'adoption de {keyword}",
    "{keyword} : gouvernance et conformité",
    "Cadrage opérationnel de {keyword}",
    "{keyword} : incidences organisationnelles et financières",
    "Appréciation critique des démarches de {keyword}",
    "{keyword} : principes directeurs et recommandations",
    "Dispositif d'accompagnement autour de {keyword}",
];

pub const SUBTITLES: &[&str] = &[
    "Focus sur {kw1} et {kw2}",
    "De {kw1} à {kw2}, le tour de la question",
    "L'apport de {kw1} et de {kw2}",
    "Entre {kw1} et {kw2}, quelles priorités ?",
    "{kw1}, {kw2} et au-delà",
    "Le rôle de {kw1} et de {kw2} expliqué",
    "Comment {kw1} et {kw2} se complètent",
    "Zoom sur {kw1} et {kw2}",
    "Ce que {kw1} et {kw2} changent concrètement",
    "Articuler {kw1} avec {kw2}",
    "{kw1} et {kw2} passés au crible",
    "Des réponses concrètes sur {kw1} et {kw2}",
    "Inclure {kw1} et {kw2} dans votre réflexion",
    "Le duo {kw1} et {kw2} décrypté",
    "Tirer parti de {kw1} comme de {kw2}",
    "{kw1} et {kw2} au service de vos objectifs",
    "Un éclairage sur {kw1} et {kw2}",
    "Quand {kw1} rencontre {kw2}",
    "Les synergies entre {kw1} et {kw2}",
    "Bien démarrer avec {kw1} et {kw2}",
];

pub const INTROS: &[&str] = &[
    "Dans un environnement économique en constante évolution, {keyword} s'impose comme un sujet incontournable pour les entreprises de toutes tailles.",
    "Aborder {keyword} avec méthode est aujourd'hui indispensable pour rester compétitif sur son marché.",
    "Le sujet de {keyword} suscite un intérêt croissant auprès des dirigeants comme des équipes opérationnelles.",
    "Comprendre les mécanismes de {keyword} permet de prendre des décisions éclairées et durables.",
    "De nombreuses organisations découvrent chaque année les bénéfices concrets de {keyword}.",
    "Bien maîtrisé, {keyword} devient un véritable avantage concurrentiel pour votre structure.",
    "La question de {keyword} revient systématiquement dans les échanges avec nos clients.",
    "Investir du temps dans {keyword} est l'une des décisions les plus rentables pour une entreprise en croissance.",
    "Les pratiques autour de {keyword} ont profondément évolué au cours des dernières années.",
    "S'intéresser à {keyword}, c'est avant tout chercher à structurer et à pérenniser son activité.",
    "Trop d'entreprises repoussent encore le chantier de {keyword}, souvent par manque d'information.",
    "Entre idées reçues et vraies bonnes pratiques, {keyword} mérite un éclairage complet.",
    "Chaque secteur d'activité aborde {keyword} avec ses propres contraintes et ses propres opportunités.",
    "La réussite d'un projet autour de {keyword} repose d'abord sur une bonne compréhension des fondamentaux.",
    "Qu'il s'agisse d'une première approche ou d'un approfondissement, {keyword} demande une démarche structurée.",
    "Les attentes des clients comme des partenaires placent désormais {keyword} au centre des priorités.",
    "Faire le point sur {keyword} permet souvent de révéler des marges de progression insoupçonnées.",
    "Dans cet article, nous passons en revue tout ce qu'il faut savoir sur {keyword}.",
    "Loin d'être un simple effet de mode, {keyword} répond à des besoins bien réels des organisations.",
    "Se former et s'informer sur {keyword} est le premier pas vers une mise en œuvre réussie.",
];

pub const INTRO_COMPANY: &str =
    "Forte de son expérience, {name} accompagne ses clients au quotidien : {description}";

pub const INTRO_CLOSING: &str =
    "Cet article vous donne les repères essentiels pour avancer sereinement sur le sujet.";

pub const CONTEXTS: &[&str] = &[
    "Le contexte actuel pousse les entreprises à professionnaliser chacun de leurs processus.",
    "Les évolutions réglementaires récentes renforcent l'importance d'une démarche rigoureuse.",
    "La digitalisation des usages transforme en profondeur les attentes du marché.",
    "La concurrence accrue impose de gagner en efficacité sur l'ensemble de la chaîne de valeur.",
    "Les clients attendent désormais un niveau de service irréprochable à chaque étape.",
    "Les outils disponibles aujourd'hui rendent accessibles des pratiques autrefois réservées aux grands groupes.",
    "Les petites structures disposent désormais des mêmes leviers que les acteurs installés.",
    "Le marché récompense les organisations capables de s'adapter rapidement.",
    "Les cycles de décision se raccourcissent et exigent des bases solides.",
    "La maîtrise des coûts reste une préoccupation centrale pour la plupart des dirigeants.",
    "Les partenaires financiers accordent une attention croissante à la qualité de la gestion.",
    "Les talents recherchent des entreprises structurées et transparentes.",
    "La confiance des clients se construit sur des engagements tenus dans la durée.",
    "Chaque décision opérationnelle a désormais des répercussions visibles sur la réputation de l'entreprise.",
    "Les données jouent un rôle grandissant dans le pilotage des activités.",
    "L'externalisation de certaines fonctions redessine l'organisation des entreprises.",
    "Les attentes en matière de responsabilité sociétale modifient les priorités stratégiques.",
    "La relation client s'étend aujourd'hui bien au-delà de la simple transaction.",
    "Les entreprises les plus performantes investissent tôt dans leurs fondations opérationnelles.",
    "L'incertitude économique renforce le besoin de visibilité et d'anticipation.",
];

pub const BENEFITS: &[&str] = &[
    "Une démarche structurée permet de gagner un temps précieux au quotidien.",
    "Les bénéfices se mesurent rapidement, tant sur le plan financier qu'organisationnel.",
    "C'est aussi l'occasion de clarifier les rôles et les responsabilités de chacun.",
    "Les équipes gagnent en sérénité lorsqu'elles s'appuient sur des processus fiables.",
    "Les erreurs coûteuses deviennent beaucoup plus rares une fois les bons réflexes installés.",
    "La qualité de service perçue par les clients s'en trouve directement améliorée.",
    "Chaque progrès réalisé renforce la crédibilité de l'entreprise auprès de ses partenaires.",
    "Les décisions s'appuient alors sur des informations fiables et à jour.",
    "L'entreprise se dote d'un socle solide pour absorber sa croissance.",
    "Les audits et contrôles se déroulent sans stress lorsque tout est bien tenu.",
    "La visibilité obtenue facilite les arbitrages budgétaires.",
    "Les collaborateurs montent en compétence et gagnent en autonomie.",
    "Le dirigeant peut se recentrer sur le développement de son activité.",
    "Les opportunités commerciales sont identifiées et saisies plus tôt.",
    "La conformité cesse d'être une contrainte pour devenir une routine maîtrisée.",
    "Les échanges avec les conseils externes deviennent plus efficaces et moins coûteux.",
    "Les risques sont identifiés en amont plutôt que subis en aval.",
    "La trésorerie se pilote avec précision plutôt qu'au jugé.",
    "Chaque euro investi produit un retour mesurable.",
    "L'image de marque bénéficie d'une organisation visiblement professionnelle.",
];

pub const CONTEXT_CLOSING: &str =
    "C'est dans ce cadre que s'inscrivent les recommandations détaillées ci-dessous.";

pub const SECTION_TITLES: &[&str] = &[
    "Comprendre {keyword} en pratique",
    "{keyword} : les points essentiels",
    "Pourquoi {keyword} compte pour votre activité",
    "Mettre en place {keyword} pas à pas",
    "{keyword} : notre analyse détaillée",
];

pub const SECTION_INTROS: &[&str] = &[
    "Le volet {keyword} mérite une attention particulière dans toute démarche sérieuse.",
    "Bien appréhender {keyword} conditionne la réussite de l'ensemble du projet.",
    "Sur le terrain, {keyword} se traduit par des choix concrets et mesurables.",
    "Les retours d'expérience convergent : {keyword} est un facteur déterminant.",
    "Avant toute décision, il convient de cerner précisément ce que recouvre {keyword}.",
];

pub const SECTION_COMPANY: &str =
    "C'est un domaine dans lequel {name} a développé un savoir-faire reconnu.";

pub const SECTION_LISTS: &[&[&str]] = &[
    &[
        "Réaliser un état des lieux objectif de l'existant",
        "Définir des objectifs clairs et mesurables",
        "Identifier les ressources internes mobilisables",
        "Établir un calendrier réaliste de déploiement",
        "Prévoir des points de contrôle réguliers",
    ],
    &[
        "Cartographier les processus concernés",
        "Prioriser les actions à fort impact",
        "Impliquer les équipes dès le départ",
        "Documenter chaque étape du projet",
        "Mesurer les résultats obtenus",
    ],
    &[
        "S'appuyer sur des outils adaptés à sa taille",
        "Former les collaborateurs aux nouvelles pratiques",
        "Centraliser l'information utile",
        "Automatiser les tâches répétitives",
        "Capitaliser sur les premiers succès",
    ],
    &[
        "Clarifier les responsabilités de chaque intervenant",
        "Sécuriser les données et les accès",
        "Anticiper les obligations réglementaires",
        "Organiser une veille régulière",
        "Ajuster la démarche au fil des retours",
    ],
    &[
        "Partir des besoins réels plutôt que des outils",
        "Tester à petite échelle avant de généraliser",
        "Comparer plusieurs approches du marché",
        "Solliciter un avis expert aux étapes clés",
        "Garder une trace des décisions prises",
    ],
];

pub const SECTION_DETAILS: &[&str] = &[
    "Dans le détail, la mise en œuvre demande de la constance : les premiers résultats apparaissent vite, mais c'est la régularité qui transforme l'essai. Les entreprises qui réussissent consacrent un temps dédié chaque semaine à ce chantier.",
    "Concrètement, il s'agit d'avancer par itérations courtes : chaque ajustement est évalué avant de passer au suivant. Cette approche progressive limite les risques et facilite l'adhésion des équipes.",
    "Sur le plan opérationnel, la clé réside dans la qualité de l'information de départ : des données fiables et bien organisées rendent chaque décision plus simple et plus rapide.",
];

pub const SECTION_IMPACTS: &[&str] = &[
    "L'impact se mesure à plusieurs niveaux : gain de temps, réduction des erreurs et meilleure visibilité sur l'activité. Autant d'éléments qui renforcent durablement la position de l'entreprise.",
    "À moyen terme, les effets dépassent le seul périmètre initial : la rigueur acquise se diffuse dans les autres processus de l'entreprise et élève le niveau d'exigence global.",
    "Les bénéfices ne sont pas que financiers : la confiance des clients, des partenaires et des équipes progresse à mesure que l'organisation démontre sa fiabilité.",
];

pub const ANALYSIS_TITLES: &[&str] = &[
    "Analyse : deux trajectoires possibles",
    "Étude de cas : quelle approche choisir ?",
    "Deux scénarios de mise en œuvre",
    "Analyse comparée des démarches",
    "Quelle trajectoire pour votre entreprise ?",
];

pub const ANALYSIS_INTROS: &[&str] = &[
    "Selon la maturité de votre organisation, deux trajectoires se dessinent généralement.",
    "L'expérience montre que les entreprises empruntent le plus souvent l'un des deux chemins suivants.",
    "Le choix de la démarche dépend de vos moyens, de votre calendrier et de vos ambitions.",
    "Avant de trancher, il est utile de comparer les deux scénarios types ci-dessous.",
    "Chaque entreprise avance à son rythme ; voici les deux configurations les plus courantes.",
];

pub const SCENARIO_PROGRESSIVE_TITLES: &[&str] = &[
    "Scénario 1 : l'amélioration progressive",
    "Option A : avancer par étapes",
    "La démarche incrémentale",
    "Le chemin progressif",
    "Consolider l'existant pas à pas",
];

pub const SCENARIO_PROGRESSIVE_DESCRIPTIONS: &[&str] = &[
    "Cette approche consiste à améliorer l'existant par petites touches, en commençant par les actions les moins coûteuses. Elle convient aux structures qui souhaitent limiter les perturbations et étaler l'investissement dans le temps.",
    "On conserve ici les outils et habitudes en place, que l'on fait évoluer graduellement. Les résultats arrivent plus lentement mais l'effort demandé aux équipes reste modéré.",
    "L'entreprise traite en priorité les irritants les plus visibles, puis élargit le périmètre au fil des succès. Un choix prudent, adapté aux agendas chargés.",
];

pub const SCENARIO_COMPLETE_TITLES: &[&str] = &[
    "Scénario 2 : la transformation complète",
    "Option B : repartir sur des bases neuves",
    "La refonte globale",
    "Le chemin de la transformation",
    "Reconstruire pour mieux accélérer",
];

pub const SCENARIO_COMPLETE_DESCRIPTIONS: &[&str] = &[
    "Cette trajectoire remet à plat l'ensemble du dispositif pour reconstruire sur des bases saines. Plus exigeante à court terme, elle produit des gains nettement supérieurs une fois le cap franchi.",
    "L'entreprise investit ici massivement sur une période courte : nouveaux outils, nouveaux processus, accompagnement dédié. Le retour sur investissement est rapide lorsque le projet est bien piloté.",
    "On repense l'organisation dans sa globalité plutôt que de corriger ponctuellement. Ce scénario s'impose souvent lorsque la croissance a dépassé les capacités du dispositif historique.",
];

pub const ADVICE_TITLES: &[&str] = &[
    "Nos conseils pour bien démarrer",
    "Cinq recommandations concrètes",
    "Les conseils de nos experts",
    "Par où commencer : nos recommandations",
    "Feuille de route recommandée",
];

pub const ADVICE_INTROS: &[&str] = &[
    "Pour transformer ces principes en résultats, voici les recommandations que nous formulons le plus souvent.",
    "Ces conseils, issus du terrain, s'appliquent à la grande majorité des situations.",
    "Avant de vous lancer, gardez en tête les recommandations suivantes.",
    "Voici, dans l'ordre, les actions qui produisent le plus de valeur.",
    "Ces cinq recommandations constituent un socle de départ éprouvé.",
];

pub const ADVICE_SETS: &[&[&str]] = &[
    &[
        "Commencez par un diagnostic honnête de votre situation actuelle",
        "Fixez un objectif prioritaire plutôt que dix objectifs secondaires",
        "Bloquez un créneau hebdomadaire dédié à l'avancement du projet",
        "Choisissez des outils simples que vos équipes utiliseront vraiment",
        "Faites le point chaque mois et ajustez la trajectoire",
    ],
    &[
        "Impliquez les personnes concernées dès la phase de réflexion",
        "Formalisez par écrit les décisions et les procédures clés",
        "Traitez les sujets réglementaires avant les sujets de confort",
        "Mesurez un petit nombre d'indicateurs, mais suivez-les vraiment",
        "Célébrez les premières victoires pour entretenir la dynamique",
    ],
    &[
        "Appuyez-vous sur un interlocuteur expert pour les arbitrages sensibles",
        "Sécurisez vos données avant toute migration ou changement d'outil",
        "Planifiez la montée en charge sur plusieurs trimestres",
        "Documentez les cas particuliers rencontrés en cours de route",
        "Réévaluez votre dispositif au moins une fois par an",
    ],
];

pub const CHALLENGE_TITLES: &[&str] = &[
    "Les défis à anticiper",
    "Points de vigilance",
    "Les obstacles les plus fréquents",
    "Ce qui peut freiner votre projet",
    "Difficultés courantes et parades",
];

pub const CHALLENGE_INTROS: &[&str] = &[
    "Aucun projet ne se déroule sans frictions ; mieux vaut connaître les difficultés classiques à l'avance.",
    "Les obstacles suivants reviennent régulièrement, quel que soit le secteur d'activité.",
    "Anticiper ces points de vigilance évite la plupart des déconvenues.",
    "Voici les freins les plus couramment observés sur le terrain.",
    "Ces défis ne doivent pas décourager : ils se surmontent avec de la méthode.",
];

pub const CHALLENGE_SETS: &[&[&str]] = &[
    &[
        "Le manque de temps disponible des équipes en place",
        "La résistance naturelle au changement d'habitudes",
        "La dispersion de l'information entre plusieurs outils",
        "La difficulté à maintenir l'effort dans la durée",
    ],
    &[
        "Un périmètre initial trop ambitieux",
        "Des données de départ incomplètes ou peu fiables",
        "L'absence de responsable clairement identifié",
        "Des outils choisis avant d'avoir défini les besoins",
    ],
    &[
        "La sous-estimation du budget d'accompagnement",
        "Les évolutions réglementaires en cours de projet",
        "Le turnover des personnes formées",
        "La tentation de revenir aux anciennes pratiques",
    ],
];

pub const CONCLUSION_TITLES: &[&str] = &[
    "Conclusion",
    "Ce qu'il faut retenir",
    "En résumé",
    "Le mot de la fin",
    "Pour aller de l'avant",
];

pub const CONCLUSION_INTROS: &[&str] = &[
    "Vous disposez désormais d'une vision claire du sujet et des étapes à suivre.",
    "L'essentiel est de passer à l'action, même modestement, dès les prochaines semaines.",
    "Chaque entreprise peut progresser sur ce terrain, quels que soient sa taille et son historique.",
    "Les fondamentaux présentés ici s'appliquent immédiatement à votre situation.",
    "La réussite tient moins aux moyens engagés qu'à la régularité de la démarche.",
];

pub const CONCLUSION_CONTACT: &str =
    "L'équipe de {name}, basée à {city}, se tient à votre disposition pour échanger sur votre situation.";

pub const CONCLUSION_CONTACT_NO_CITY: &str =
    "L'équipe de {name} se tient à votre disposition pour échanger sur votre situation.";

pub const PERSPECTIVES: &[&str] = &[
    "Les mois à venir verront ces pratiques se généraliser : autant prendre de l'avance dès maintenant.",
    "Le sujet continuera d'évoluer ; une veille régulière vous permettra de rester au bon niveau.",
    "Les entreprises qui s'y mettent aujourd'hui construisent l'avantage concurrentiel de demain.",
    "De nouveaux outils simplifieront encore la démarche ; les fondations posées aujourd'hui resteront valables.",
    "La dynamique engagée appelle naturellement d'autres chantiers d'amélioration.",
];

pub const CONCLUSION_BENEFITS: &[&str] = &[
    "Au final, les gains conjugués de temps, de fiabilité et de visibilité justifient largement l'effort initial. C'est un investissement dont les effets se renforcent d'année en année.",
    "Les bénéfices dépassent le cadre strictement opérationnel : c'est toute la relation avec vos clients et partenaires qui gagne en qualité.",
    "En structurant votre démarche dès maintenant, vous transformez une obligation en opportunité durable de développement.",
];

pub const CTA_TITLES: &[&str] = &[
    "Besoin d'un accompagnement ?",
    "Parlons de votre projet",
    "Passez à l'étape suivante",
    "Un projet en tête ?",
    "Échangeons sur vos besoins",
];

pub const CTA_INTROS: &[&str] = &[
    "Chaque situation est unique : un échange rapide permet souvent d'y voir beaucoup plus clair.",
    "Nos équipes répondent à vos questions et vous orientent sans engagement.",
    "Un premier rendez-vous suffit généralement à identifier vos priorités.",
    "Nous étudions votre contexte et vous proposons une démarche sur mesure.",
    "Profitez d'un premier échange pour valider vos options.",
];

pub const CTA_PHONE: &str = "Appelez-nous au {phone} pour un premier échange.";

pub const CTA_EMAIL: &str = "Écrivez-nous à {email}, nous répondons sous 24 heures.";

pub const CTA_OFFERS: &[&str] = &[
    "Premier diagnostic offert, sans engagement.",
    "Devis personnalisé sous 48 heures.",
    "Audit initial gratuit pour toute prise de contact ce mois-ci.",
    "Accompagnement modulable selon votre budget.",
    "Offre découverte réservée aux nouveaux clients.",
];

/// Fixed expansion suite appended in full when a draft falls under its
/// length bucket minimum. Constant by design: no variant selection here.
pub const EXPANSION_SECTIONS: &str = "\
<h2>Considérations complémentaires</h2>\
<p>Au-delà des fondamentaux présentés plus haut, plusieurs dimensions méritent d'être intégrées à votre réflexion. La gouvernance du projet, d'abord : désigner un responsable unique, doté d'un mandat clair, évite la dilution des décisions. Le rythme, ensuite : mieux vaut un effort modeste mais constant qu'une mobilisation intense suivie d'un abandon. Enfin, la communication interne joue un rôle souvent sous-estimé ; expliquer le pourquoi des changements facilite grandement leur adoption par les équipes.</p>\
<h2>Indicateurs et mesure de la performance</h2>\
<p>Ce qui ne se mesure pas ne s'améliore pas. Définissez dès le départ trois à cinq indicateurs simples : temps consacré aux tâches récurrentes, taux d'erreur constaté, délais de traitement, satisfaction des utilisateurs internes. Relevez-les à intervalle fixe et conservez l'historique : la tendance compte davantage que la valeur absolue. Un tableau de bord d'une seule page, consulté chaque mois, suffit à piloter la plupart des démarches.</p>\
<h2>Tendances du marché</h2>\
<p>Le marché évolue rapidement : automatisation croissante des tâches répétitives, montée en puissance des solutions en ligne accessibles aux petites structures, exigences réglementaires renforcées, attentes accrues en matière de transparence. Les entreprises qui observent ces tendances ajustent leur feuille de route en continu plutôt que de subir des mises à niveau brutales. Une veille trimestrielle, même légère, suffit à rester informé des évolutions majeures.</p>\
<h2>Stratégies de mise en œuvre</h2>\
<p>Trois stratégies dominent dans les retours d'expérience. La première consiste à internaliser entièrement la démarche, ce qui maximise l'appropriation mais demande du temps. La deuxième s'appuie sur un prestataire externe pour accélérer, au prix d'une dépendance à gérer. La troisième, hybride, confie les fondations à un expert puis transfère progressivement la maîtrise aux équipes internes : c'est souvent le meilleur compromis entre vitesse et autonomie.</p>\
<h2>Études de cas</h2>\
<p>Une entreprise de services de taille moyenne a réduit d'un tiers le temps consacré à ses tâches administratives en six mois, simplement en standardisant ses procédures et en éliminant les doubles saisies. Un commerce indépendant, de son côté, a gagné en visibilité sur sa trésorerie en centralisant ses informations dans un outil unique, ce qui lui a permis d'anticiper un besoin de financement au lieu de le subir. Ces exemples illustrent un principe constant : les gains viennent de la méthode plus que des moyens.</p>\
<h2>Outils et ressources</h2>\
<p>L'écosystème d'outils est aujourd'hui riche et accessible : solutions de gestion en ligne, plateformes collaboratives, services d'automatisation, organismes professionnels proposant guides et formations. Le bon outil est celui que vos équipes utiliseront réellement : privilégiez la simplicité d'usage et la qualité de l'accompagnement plutôt que l'exhaustivité des fonctionnalités. Les versions d'essai permettent de valider un choix avant tout engagement.</p>\
<h2>Plan d'action</h2>\
<p>Pour conclure, voici une trame directement applicable : semaine 1, réalisez l'état des lieux et fixez votre objectif prioritaire ; semaines 2 à 4, traitez les actions rapides à fort impact ; mois 2 et 3, déployez les changements structurants en accompagnant les équipes ; ensuite, installez une revue mensuelle pour mesurer, corriger et consolider. En suivant ce rythme, la plupart des entreprises constatent des résultats tangibles avant la fin du premier trimestre.</p>";
